//! Timeline drill-down over the vault's documents.
//!
//! Buckets documents by year, month, week and day. The drill-down list shows
//! non-empty periods newest first and narrows one level per click, with a
//! breadcrumb trail back up. The horizontal view shows every period between
//! the first and last document, oldest first, empty periods included.
//! Groups are recomputed from the document snapshot on every query.

mod buckets;
mod navigator;
mod periods;
mod types;

pub use buckets::*;
pub use navigator::*;
pub use periods::*;
pub use types::*;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Cannot drill below document level")]
    NoFinerGranularity,

    #[error("Breadcrumb index {index} out of range (trail has {len} entries)")]
    BreadcrumbOutOfRange { index: usize, len: usize },

    #[error("Group was built at {actual} level but the timeline is at {expected}")]
    GranularityMismatch {
        expected: Granularity,
        actual: Granularity,
    },

    #[error("Invalid timeline range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Timeline root must be year or month, got {0}")]
    InvalidRoot(Granularity),
}

// ── Tests ──────────────────────────────────────────────────────────────────
