use chrono::NaiveDate;

use crate::config::TimelineConfig;
use crate::models::Document;

use super::buckets::group_documents_by_period;
use super::types::{Breadcrumb, Granularity, NavigatorState, TimelineGroup, WeekStart};
use super::TimelineError;

/// Drill-down state machine over a snapshot of the vault's documents.
///
/// State only changes through [`drill_down`](Self::drill_down) and
/// [`breadcrumb_click`](Self::breadcrumb_click); a rejected command leaves it
/// untouched. The breadcrumb tip always carries the current granularity.
#[derive(Debug, Clone)]
pub struct DrillNavigator {
    documents: Vec<Document>,
    week_start: WeekStart,
    granularity: Granularity,
    selected_period: Option<NaiveDate>,
    breadcrumbs: Vec<Breadcrumb>,
}

impl DrillNavigator {
    /// Starts at the month level with a single "All Months" breadcrumb.
    pub fn new(documents: Vec<Document>) -> Self {
        let config = TimelineConfig::default();
        Self::at_root(documents, config.root_granularity, config.drill_week_start)
    }

    /// Starts at the configured root. Fails with
    /// [`TimelineError::InvalidRoot`] for a root finer than month.
    pub fn with_config(
        documents: Vec<Document>,
        config: &TimelineConfig,
    ) -> Result<Self, TimelineError> {
        config.validate()?;
        Ok(Self::at_root(documents, config.root_granularity, config.drill_week_start))
    }

    fn at_root(documents: Vec<Document>, root: Granularity, week_start: WeekStart) -> Self {
        Self {
            documents,
            week_start,
            granularity: root,
            selected_period: None,
            breadcrumbs: vec![Breadcrumb::root(root)],
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn selected_period(&self) -> Option<NaiveDate> {
        self.selected_period
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn state(&self) -> NavigatorState {
        NavigatorState {
            granularity: self.granularity,
            selected_period: self.selected_period,
            breadcrumbs: self.breadcrumbs.clone(),
        }
    }

    /// Replaces the document snapshot, e.g. after the list was searched.
    /// Navigation state is kept.
    pub fn set_documents(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    /// Descends into `group`, one level finer than the current one.
    pub fn drill_down(&mut self, group: &TimelineGroup) -> Result<Granularity, TimelineError> {
        let next = self
            .granularity
            .successor()
            .ok_or(TimelineError::NoFinerGranularity)?;
        if group.granularity != self.granularity {
            return Err(TimelineError::GranularityMismatch {
                expected: self.granularity,
                actual: group.granularity,
            });
        }

        self.granularity = next;
        self.selected_period = Some(group.anchor);
        self.breadcrumbs.push(Breadcrumb {
            granularity: next,
            period: Some(group.anchor),
            label: group.display_name.clone(),
        });

        tracing::debug!(
            granularity = %next,
            period = %group.anchor,
            depth = self.breadcrumbs.len(),
            "Drilled down"
        );
        Ok(next)
    }

    /// Returns to the breadcrumb at `index`, dropping every entry after it.
    pub fn breadcrumb_click(&mut self, index: usize) -> Result<(), TimelineError> {
        let target = self
            .breadcrumbs
            .get(index)
            .ok_or(TimelineError::BreadcrumbOutOfRange {
                index,
                len: self.breadcrumbs.len(),
            })?;

        self.granularity = target.granularity;
        self.selected_period = target.period;
        self.breadcrumbs.truncate(index + 1);

        tracing::debug!(granularity = %self.granularity, index, "Breadcrumb selected");
        Ok(())
    }

    /// Groups at the current level, newest first. Empty at `Document` level.
    pub fn visible_groups(&self) -> Vec<TimelineGroup> {
        group_documents_by_period(
            &self.documents,
            self.granularity,
            self.selected_period,
            self.week_start,
        )
    }

    /// Documents dated exactly on the selected day, in snapshot order.
    /// Empty unless at `Document` level.
    pub fn visible_documents(&self) -> Vec<Document> {
        match (self.granularity, self.selected_period) {
            (Granularity::Document, Some(day)) => self
                .documents
                .iter()
                .filter(|doc| doc.date == day)
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }
}
