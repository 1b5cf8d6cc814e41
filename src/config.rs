use std::time::Duration;

use crate::constants::{aggregate, cache, paging};

/// Top-level catalog configuration.
///
/// The cap, seed, page size, and staleness window are deployment policy,
/// not engine behavior, so they live here rather than in code.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Hard cap on the aggregated record count; `None` disables sampling.
    pub sample_cap: Option<usize>,
    /// RNG seed for cap sampling. Keep constant so repeated queries against
    /// unchanged data reproduce the same sample.
    pub sample_seed: u64,
    /// Records per page window.
    pub page_size: usize,
    /// Bounded-staleness window for cached snapshots; queries past it
    /// refetch through the source.
    pub refresh_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sample_cap: Some(aggregate::DEFAULT_SAMPLE_CAP),
            sample_seed: aggregate::DEFAULT_SAMPLE_SEED,
            page_size: paging::DEFAULT_PAGE_SIZE,
            refresh_ttl: cache::DEFAULT_REFRESH_TTL,
        }
    }
}
