use std::sync::Arc;

use super::aggregate::Project;
use super::filter::{FilterBar, FilterState};
use super::stats::{compute_stats, CatalogStats};

/// Number of featured cards on the home page grid.
pub const HIGHLIGHTS_LIMIT: usize = 3;

/// What the card container shows for a given record slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardList<'a> {
    /// A single "No projects found." placeholder.
    Empty,
    /// One card per record, in the given order.
    Cards(&'a [Project]),
}

pub fn render_plan(records: &[Project]) -> CardList<'_> {
    if records.is_empty() {
        CardList::Empty
    } else {
        CardList::Cards(records)
    }
}

/// Presentation state of the catalog page: the source records, the filter
/// bar, and the view and stats derived from the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    records: Arc<[Project]>,
    filters: FilterBar,
    visible: Vec<Project>,
    stats: CatalogStats,
}

impl CatalogView {
    /// Loaded state with the "all" filter active.
    pub fn new(records: Arc<[Project]>) -> Self {
        let filters = FilterBar::from_records(&records);
        let mut view = Self {
            records,
            filters,
            visible: Vec::new(),
            stats: CatalogStats::default(),
        };
        view.refresh();
        view
    }

    /// Build the view and immediately apply `filter`.
    pub fn with_filter(records: Arc<[Project]>, filter: FilterState) -> Self {
        let mut view = Self::new(records);
        view.select(filter);
        view
    }

    /// The only way to change the filter: updates the active control, then
    /// the visible records, then the stats for those records.
    pub fn select(&mut self, filter: FilterState) -> bool {
        if !self.filters.activate(filter) {
            return false;
        }
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.visible = self
            .filters
            .active()
            .apply(&self.records)
            .cloned()
            .collect();
        self.stats = compute_stats(&self.visible);
    }

    pub fn records(&self) -> &Arc<[Project]> {
        &self.records
    }

    pub fn filters(&self) -> &FilterBar {
        &self.filters
    }

    pub fn active(&self) -> &FilterState {
        self.filters.active()
    }

    pub fn visible(&self) -> &[Project] {
        &self.visible
    }

    pub fn stats(&self) -> CatalogStats {
        self.stats
    }

    pub fn cards(&self) -> CardList<'_> {
        render_plan(&self.visible)
    }
}

/// First `limit` featured records, in source order.
pub fn highlights(records: &[Project], limit: usize) -> Vec<Project> {
    records
        .iter()
        .filter(|p| p.featured)
        .take(limit)
        .cloned()
        .collect()
}
