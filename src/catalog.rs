//! The catalog facade: one source, one cache, one synchronous pass per
//! query.
//!
//! Each user interaction runs the whole pipeline, snapshot (through the
//! cache) → filter → paginate, before producing output. Nothing suspends
//! mid-pass, and the aggregated record set is immutable shared-read.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CatalogCache, CatalogSnapshot};
use crate::config::CatalogConfig;
use crate::errors::CatalogError;
use crate::filter::{self, CategoricalField, TuitionRange};
use crate::paginate::paginate;
use crate::query::{QueryOutcome, QueryState};
use crate::source::SheetSource;
use crate::types::FieldValue;

/// A queryable program catalog backed by one sheet source.
pub struct Catalog<S: SheetSource> {
    source: S,
    cache: CatalogCache,
    config: CatalogConfig,
}

impl<S: SheetSource> Catalog<S> {
    /// Create a catalog over `source` with the given configuration.
    pub fn new(source: S, config: CatalogConfig) -> Self {
        let cache = CatalogCache::new(config.refresh_ttl);
        Self {
            source,
            cache,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Run one complete filter → paginate pass for `state`.
    ///
    /// Out-of-range pages clamp; an empty match set is a normal outcome
    /// with zero pages. Only a source fetch failure is an error.
    pub fn query(&self, state: &QueryState) -> Result<QueryOutcome, CatalogError> {
        let snapshot = self.snapshot()?;
        let matches = filter::filter(&snapshot.records, &state.filters);
        let window = paginate(matches.len(), self.config.page_size, state.current_page);
        let records = matches[window.start..window.end].to_vec();
        debug!(
            matches = matches.len(),
            page = window.page,
            total_pages = window.total_pages,
            "query evaluated"
        );
        Ok(QueryOutcome {
            records,
            current_page: window.page,
            total_pages: window.total_pages,
            total_matches: matches.len(),
            truncated: snapshot.truncated,
            fetched_at: snapshot.fetched_at,
        })
    }

    /// Force a refetch of the backing source, replacing the cached
    /// snapshot.
    pub fn refresh(&self) -> Result<(), CatalogError> {
        self.cache.refresh(&self.source, &self.config).map(|_| ())
    }

    /// UI option list for `field`: sorted distinct values, sentinel first.
    pub fn filter_options(&self, field: CategoricalField) -> Result<Vec<FieldValue>, CatalogError> {
        let snapshot = self.snapshot()?;
        Ok(filter::filter_options(&snapshot.records, field))
    }

    /// Observed tuition bounds, for seeding a range slider.
    pub fn observed_tuition_range(&self) -> Result<Option<TuitionRange>, CatalogError> {
        let snapshot = self.snapshot()?;
        Ok(filter::observed_tuition_range(&snapshot.records))
    }

    /// Current snapshot, fetching through the source when stale. Exposed
    /// for callers that derive several option lists from one view.
    pub fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        self.cache.snapshot(&self.source, &self.config)
    }
}
