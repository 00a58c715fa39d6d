//! Document store: the in-memory vault the timeline reads from.
//!
//! Records are validated once on the way in. A record with an unparseable
//! date or unknown type is excluded, logged, and kept in the rejection list;
//! nothing downstream ever sees an untyped date.

use chrono::NaiveDate;

use crate::models::{
    Document, DocumentFilter, DocumentSort, DocumentType, ModelError, RawDocument,
};

/// A record excluded at ingestion, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub record: RawDocument,
    pub error: ModelError,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    rejected: Vec<RejectedRecord>,
}

impl DocumentStore {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            rejected: Vec::new(),
        }
    }

    /// Ingests raw records, excluding each malformed one individually.
    pub fn from_records(records: impl IntoIterator<Item = RawDocument>) -> Self {
        let mut store = Self::default();
        for record in records {
            store.ingest(record);
        }
        store
    }

    /// Validates and adds one record. Returns `false` if it was rejected.
    pub fn ingest(&mut self, record: RawDocument) -> bool {
        match Document::try_from(record.clone()) {
            Ok(doc) => {
                self.documents.push(doc);
                true
            }
            Err(error) => {
                tracing::warn!(id = %record.id, %error, "Rejected document record");
                self.rejected.push(RejectedRecord { record, error });
                false
            }
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Filtered, sorted copy of the vault for the document list.
    /// Ties keep store order.
    pub fn query(&self, filter: &DocumentFilter, sort: &DocumentSort) -> Vec<Document> {
        let mut docs: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect();
        docs.sort_by(|a, b| sort.compare(a, b));
        docs
    }
}

/// The demo vault's seed documents.
pub fn mock_documents() -> Vec<Document> {
    let seed: [(&str, &str, &str, (i32, u32, u32), DocumentType); 10] = [
        (
            "1",
            "Blood Test Results",
            "Dr. Sarah Johnson",
            (2024, 12, 15),
            DocumentType::Lab,
        ),
        (
            "2",
            "Prescription - Amoxicillin",
            "Dr. Michael Chen",
            (2024, 12, 12),
            DocumentType::Prescription,
        ),
        (
            "3",
            "Annual Physical Report",
            "Dr. Sarah Johnson",
            (2024, 12, 10),
            DocumentType::Report,
        ),
        (
            "4",
            "Chest X-Ray Scan",
            "Dr. Robert Kim",
            (2024, 12, 8),
            DocumentType::Scan,
        ),
        (
            "5",
            "Cholesterol Panel",
            "Dr. Sarah Johnson",
            (2024, 11, 22),
            DocumentType::Lab,
        ),
        (
            "6",
            "MRI Brain Scan",
            "Dr. Jennifer Lee",
            (2024, 11, 15),
            DocumentType::Scan,
        ),
        (
            "7",
            "Prescription - Lisinopril",
            "Dr. Michael Chen",
            (2024, 11, 8),
            DocumentType::Prescription,
        ),
        (
            "8",
            "Cardiology Consultation Report",
            "Dr. William Brown",
            (2024, 10, 25),
            DocumentType::Report,
        ),
        (
            "9",
            "Thyroid Function Test",
            "Dr. Sarah Johnson",
            (2024, 10, 18),
            DocumentType::Lab,
        ),
        (
            "10",
            "Ultrasound Abdomen",
            "Dr. Robert Kim",
            (2024, 9, 30),
            DocumentType::Scan,
        ),
    ];

    seed.into_iter()
        .filter_map(|(id, title, doctor, (y, m, d), doc_type)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|date| Document::new(id, title, doctor, date, doc_type))
        })
        .collect()
}
