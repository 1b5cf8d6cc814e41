//! Caller-owned query state and per-query outcomes.
//!
//! `QueryState` replaces ambient session globals: the host (web UI, CLI,
//! notebook) persists it across interactions and passes it into each
//! pipeline call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::ProgramRecord;
use crate::filter::FilterSpec;
use crate::types::SearchQuery;

/// Session-scoped filter criteria plus page cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Active filter criteria.
    pub filters: FilterSpec,
    /// 1-based requested page; the paginator clamps out-of-range values.
    pub current_page: usize,
}

impl QueryState {
    /// Fresh state: no constraints, first page.
    pub fn new() -> Self {
        Self {
            filters: FilterSpec::default(),
            current_page: 1,
        }
    }

    /// Replace the filter criteria. Resets the cursor to the first page,
    /// since the old page number is meaningless against a new result set.
    pub fn apply_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
        self.current_page = 1;
    }

    /// Replace the search query, resetting the cursor to the first page.
    pub fn apply_search(&mut self, query: impl Into<SearchQuery>) {
        self.filters.search_query = query.into();
        self.current_page = 1;
    }

    /// Advance the cursor one page.
    pub fn next_page(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    /// Move the cursor back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

/// One synchronous pass's result: the page window plus paging facts.
#[derive(Clone, Debug, Serialize)]
pub struct QueryOutcome {
    /// Records inside the served page window.
    pub records: Vec<ProgramRecord>,
    /// Page actually served after clamping.
    pub current_page: usize,
    /// Total pages for the filtered set; 0 when nothing matched.
    pub total_pages: usize,
    /// Filtered record count before windowing.
    pub total_matches: usize,
    /// True when the aggregation cap dropped rows from the backing
    /// snapshot. Informational, not an error.
    pub truncated: bool,
    /// When the backing snapshot was fetched from the source.
    pub fetched_at: DateTime<Utc>,
}
