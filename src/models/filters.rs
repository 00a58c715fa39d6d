use serde::{Deserialize, Serialize};

use super::enums::{DocumentType, SortField, SortOrder};
use super::Document;

/// Document list filter: free-text search over title and doctor plus an
/// optional type restriction. `None` type means all types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub search: Option<String>,
    pub doc_type: Option<DocumentType>,
}

impl DocumentFilter {
    pub fn matches(&self, doc: &Document) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                doc.title.to_lowercase().contains(&term)
                    || doc.doctor.to_lowercase().contains(&term)
            }
        };
        let matches_type = self.doc_type.map_or(true, |t| doc.doc_type == t);
        matches_search && matches_type
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for DocumentSort {
    /// Newest documents first.
    fn default() -> Self {
        Self {
            field: SortField::Date,
            order: SortOrder::Desc,
        }
    }
}

impl DocumentSort {
    /// Selecting the active field flips the order; a new field starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                order: self.order.flipped(),
            }
        } else {
            Self {
                field,
                order: SortOrder::Asc,
            }
        }
    }

    pub fn compare(&self, a: &Document, b: &Document) -> std::cmp::Ordering {
        let ordering = match self.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Doctor => a.doctor.to_lowercase().cmp(&b.doctor.to_lowercase()),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn doc(title: &str, doctor: &str, doc_type: DocumentType) -> Document {
        Document::new(
            "d",
            title,
            doctor,
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            doc_type,
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = DocumentFilter::default();
        assert!(filter.matches(&doc("MRI Brain Scan", "Dr. Jennifer Lee", DocumentType::Scan)));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_doctor() {
        let d = doc("Cholesterol Panel", "Dr. Sarah Johnson", DocumentType::Lab);
        let by_title = DocumentFilter {
            search: Some("cholesterol".into()),
            doc_type: None,
        };
        let by_doctor = DocumentFilter {
            search: Some("JOHNSON".into()),
            doc_type: None,
        };
        let miss = DocumentFilter {
            search: Some("thyroid".into()),
            doc_type: None,
        };
        assert!(by_title.matches(&d));
        assert!(by_doctor.matches(&d));
        assert!(!miss.matches(&d));
    }

    #[test]
    fn type_filter_combines_with_search() {
        let d = doc("Cholesterol Panel", "Dr. Sarah Johnson", DocumentType::Lab);
        let filter = DocumentFilter {
            search: Some("panel".into()),
            doc_type: Some(DocumentType::Scan),
        };
        assert!(!filter.matches(&d));
    }

    #[test]
    fn toggle_same_field_flips_order() {
        let sort = DocumentSort::default().toggle(SortField::Date);
        assert_eq!(sort.field, SortField::Date);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn toggle_new_field_starts_ascending() {
        let sort = DocumentSort::default().toggle(SortField::Doctor);
        assert_eq!(sort.field, SortField::Doctor);
        assert_eq!(sort.order, SortOrder::Asc);
    }
}
