use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::Document;

use super::periods::{
    axis_label, drill_label, next_period_start, period_key, period_start, same_period,
};
use super::types::{Granularity, SegmentRange, TimelineGroup, TimelineSummary, WeekStart};

/// Partitions `documents` into periods keyed by their start date.
/// Document order inside each bucket follows the input order.
fn bucket_by_anchor(
    documents: impl IntoIterator<Item = Document>,
    granularity: Granularity,
    week_start: WeekStart,
) -> BTreeMap<NaiveDate, Vec<Document>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Document>> = BTreeMap::new();
    for doc in documents {
        let anchor = period_start(granularity, doc.date, week_start);
        buckets.entry(anchor).or_default().push(doc);
    }
    buckets
}

/// Groups documents by period for the drill-down list, newest period first.
///
/// With `filter_period`, only documents sharing the next coarser period with
/// it are kept (a month view filtered to one year, a week view to one month,
/// a day view to one week). `Year` has no coarser level and ignores the filter.
/// Only non-empty groups are returned. `Document` is not a grouping level and
/// yields no groups.
pub fn group_documents_by_period(
    documents: &[Document],
    granularity: Granularity,
    filter_period: Option<NaiveDate>,
    week_start: WeekStart,
) -> Vec<TimelineGroup> {
    if granularity == Granularity::Document {
        return Vec::new();
    }

    let filter = filter_period.zip(granularity.coarser());
    let kept = documents.iter().filter(|doc| match filter {
        Some((anchor, coarser)) => same_period(coarser, anchor, doc.date, week_start),
        None => true,
    });

    let groups: Vec<TimelineGroup> = bucket_by_anchor(kept.cloned(), granularity, week_start)
        .into_iter()
        .rev()
        .map(|(anchor, docs)| {
            TimelineGroup::new(
                granularity,
                anchor,
                period_key(granularity, anchor),
                drill_label(granularity, anchor),
                docs,
            )
        })
        .collect();

    tracing::debug!(
        granularity = %granularity,
        filter = ?filter_period,
        groups = groups.len(),
        "Grouped documents by period"
    );

    groups
}

/// Dense segments for a continuous horizontal axis, oldest first.
///
/// Every period between the earliest and latest document date (or the
/// explicit `range`) is emitted, including periods without documents.
/// A segment holds every document of its period, so a document outside an
/// explicit range still lands in the first or last segment when it shares
/// that period. Documents outside the enumerated periods are not attached.
/// An empty document set yields no segments.
pub fn group_documents_by_segments(
    documents: &[Document],
    granularity: Granularity,
    range: Option<SegmentRange>,
    week_start: WeekStart,
) -> Vec<TimelineGroup> {
    if granularity == Granularity::Document || documents.is_empty() {
        return Vec::new();
    }

    let (start, end) = match range {
        Some(range) => (range.start(), range.end()),
        None => match date_bounds(documents) {
            Some(bounds) => bounds,
            None => return Vec::new(),
        },
    };

    let mut buckets = bucket_by_anchor(documents.iter().cloned(), granularity, week_start);
    let last = period_start(granularity, end, week_start);

    let mut segments = Vec::new();
    let mut cursor = Some(period_start(granularity, start, week_start));
    while let Some(anchor) = cursor.filter(|a| *a <= last) {
        let docs = buckets.remove(&anchor).unwrap_or_default();
        segments.push(TimelineGroup::new(
            granularity,
            anchor,
            period_key(granularity, anchor),
            axis_label(granularity, anchor),
            docs,
        ));
        // Re-anchor: a week clamped at the first date is shorter than seven days.
        cursor = next_period_start(granularity, anchor)
            .map(|next| period_start(granularity, next, week_start));
    }

    tracing::debug!(
        granularity = %granularity,
        segments = segments.len(),
        "Built dense timeline segments"
    );

    segments
}

/// Earliest and latest document dates, `None` for an empty set.
pub fn date_bounds(documents: &[Document]) -> Option<(NaiveDate, NaiveDate)> {
    let earliest = documents.iter().map(|d| d.date).min()?;
    let latest = documents.iter().map(|d| d.date).max()?;
    Some((earliest, latest))
}

/// Totals shown above the horizontal timeline.
pub fn summarize(
    documents: &[Document],
    granularity: Granularity,
    week_start: WeekStart,
) -> TimelineSummary {
    let bounds = date_bounds(documents);
    let active_periods =
        bucket_by_anchor(documents.iter().cloned(), granularity, week_start).len();

    TimelineSummary {
        total_documents: u32::try_from(documents.len()).unwrap_or(u32::MAX),
        active_periods: u32::try_from(active_periods).unwrap_or(u32::MAX),
        earliest: bounds.map(|(earliest, _)| earliest),
        latest: bounds.map(|(_, latest)| latest),
    }
}
