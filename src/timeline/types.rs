use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::enums::str_enum;
use crate::models::{Document, DocumentType};

use super::TimelineError;

str_enum!(
    /// Zoom depth of the timeline. Declaration order is the zoom order:
    /// `Year < Month < Week < Day < Document`.
    Granularity {
        Year => "year",
        Month => "month",
        Week => "week",
        Day => "day",
        Document => "document",
    }
);

impl Granularity {
    /// Next finer level on the drill chain; `None` past `Document`.
    pub fn successor(self) -> Option<Granularity> {
        match self {
            Granularity::Year => Some(Granularity::Month),
            Granularity::Month => Some(Granularity::Week),
            Granularity::Week => Some(Granularity::Day),
            Granularity::Day => Some(Granularity::Document),
            Granularity::Document => None,
        }
    }

    /// Next coarser level, used as the filter period when bucketing.
    pub fn coarser(self) -> Option<Granularity> {
        match self {
            Granularity::Year => None,
            Granularity::Month => Some(Granularity::Year),
            Granularity::Week => Some(Granularity::Month),
            Granularity::Day => Some(Granularity::Week),
            Granularity::Document => Some(Granularity::Day),
        }
    }

    /// Whether the navigator may start at this level. The root breadcrumb is
    /// month or coarser.
    pub fn is_root_level(self) -> bool {
        matches!(self, Granularity::Year | Granularity::Month)
    }

    /// Label of a breadcrumb root at this level.
    pub fn root_label(self) -> &'static str {
        match self {
            Granularity::Year => "All Years",
            Granularity::Month => "All Months",
            Granularity::Week => "All Weeks",
            Granularity::Day => "All Days",
            Granularity::Document => "All Documents",
        }
    }
}

str_enum!(
    /// First day of a week for week bucketing.
    WeekStart {
        Sunday => "sunday",
        Monday => "monday",
    }
);

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// A bucket of documents sharing one period at one granularity.
///
/// Derived on every query and never mutated afterwards; `count` always equals
/// `documents.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineGroup {
    pub period: String,
    pub display_name: String,
    pub granularity: Granularity,
    /// Start of the period.
    pub anchor: NaiveDate,
    pub count: u32,
    pub documents: Vec<Document>,
}

impl TimelineGroup {
    pub(crate) fn new(
        granularity: Granularity,
        anchor: NaiveDate,
        period: String,
        display_name: String,
        documents: Vec<Document>,
    ) -> Self {
        Self {
            period,
            display_name,
            granularity,
            anchor,
            count: u32::try_from(documents.len()).unwrap_or(u32::MAX),
            documents,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Per-type document counts; types without documents are omitted.
    pub fn type_counts(&self) -> BTreeMap<DocumentType, u32> {
        let mut counts = BTreeMap::new();
        for doc in &self.documents {
            *counts.entry(doc.doc_type).or_insert(0) += 1;
        }
        counts
    }
}

/// One entry of the navigation trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub granularity: Granularity,
    /// `None` only for the root entry.
    pub period: Option<NaiveDate>,
    pub label: String,
}

impl Breadcrumb {
    pub fn root(granularity: Granularity) -> Self {
        Self {
            granularity,
            period: None,
            label: granularity.root_label().to_string(),
        }
    }
}

/// Read-only snapshot of navigator state for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorState {
    pub granularity: Granularity,
    pub selected_period: Option<NaiveDate>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Explicit inclusive date range for dense segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl SegmentRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TimelineError> {
        if start > end {
            return Err(TimelineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Header figures for the horizontal timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub total_documents: u32,
    pub active_periods: u32,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}
