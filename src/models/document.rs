use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::DocumentType;
use super::ModelError;

/// Wire format for document dates (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A document held in the vault. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub doctor: String,
    /// Calendar date only; no time-of-day semantics.
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        doctor: impl Into<String>,
        date: NaiveDate,
        doc_type: DocumentType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            doctor: doctor.into(),
            date,
            doc_type,
        }
    }
}

/// Untyped record as supplied by the document source, before date and type
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub title: String,
    pub doctor: String,
    pub date: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

impl TryFrom<RawDocument> for Document {
    type Error = ModelError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(raw.date.trim(), DATE_FORMAT).map_err(|_| {
            ModelError::InvalidDate {
                id: raw.id.clone(),
                value: raw.date.clone(),
            }
        })?;
        let doc_type = raw.doc_type.parse::<DocumentType>()?;

        Ok(Document {
            id: raw.id,
            title: raw.title,
            doctor: raw.doctor,
            date,
            doc_type,
        })
    }
}
