//! Read-through, time-boxed snapshot cache keyed by source id.
//!
//! Each entry holds one immutable aggregated view of a source's rows.
//! Paging and refiltering share the same snapshot until its staleness
//! window lapses; only then does a query refetch through the source. At
//! most one refresh per key is in flight at a time.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::config::CatalogConfig;
use crate::data::ProgramRecord;
use crate::errors::CatalogError;
use crate::source::SheetSource;
use crate::types::SourceId;

/// One aggregated, immutable view of a source's rows.
#[derive(Clone, Debug)]
pub struct CatalogSnapshot {
    /// Aggregated records, shared read-only across queries.
    pub records: Arc<Vec<ProgramRecord>>,
    /// True when the sampling cap dropped rows during aggregation.
    pub truncated: bool,
    /// Wall-clock fetch time, for display.
    pub fetched_at: DateTime<Utc>,
    // Monotonic staleness marker; wall clocks can jump.
    refreshed: Instant,
}

impl CatalogSnapshot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.refreshed.elapsed() < ttl
    }
}

/// Read-through cache of [`CatalogSnapshot`]s.
pub struct CatalogCache {
    ttl: Duration,
    entries: RwLock<IndexMap<SourceId, Arc<CatalogSnapshot>>>,
    // Per-key guards so each source has at most one in-flight refresh.
    refresh_locks: Mutex<HashMap<SourceId, Arc<Mutex<()>>>>,
}

impl CatalogCache {
    /// Create a cache whose snapshots stay valid for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(IndexMap::new()),
            refresh_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Return a fresh snapshot for `source`, fetching through it when the
    /// cached one is missing or stale. Fetch errors propagate; they are
    /// never masked as an empty snapshot.
    pub fn snapshot(
        &self,
        source: &dyn SheetSource,
        config: &CatalogConfig,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        if let Some(snapshot) = self.cached(source.id()) {
            if snapshot.is_fresh(self.ttl) {
                return Ok(snapshot);
            }
        }
        let guard = self.refresh_guard(source.id());
        let _held = guard.lock().expect("catalog refresh guard poisoned");
        // Another query may have refreshed while we waited on the guard.
        if let Some(snapshot) = self.cached(source.id()) {
            if snapshot.is_fresh(self.ttl) {
                return Ok(snapshot);
            }
        }
        self.refresh_locked(source, config)
    }

    /// Fetch and aggregate unconditionally, replacing any cached snapshot.
    pub fn refresh(
        &self,
        source: &dyn SheetSource,
        config: &CatalogConfig,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let guard = self.refresh_guard(source.id());
        let _held = guard.lock().expect("catalog refresh guard poisoned");
        self.refresh_locked(source, config)
    }

    /// Drop the cached snapshot for `source_id`, forcing the next query to
    /// refetch.
    pub fn invalidate(&self, source_id: &str) {
        self.entries
            .write()
            .expect("catalog cache poisoned")
            .shift_remove(source_id);
    }

    /// Number of cached snapshots.
    pub fn len(&self) -> usize {
        self.entries.read().expect("catalog cache poisoned").len()
    }

    /// True when no snapshot is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn refresh_locked(
        &self,
        source: &dyn SheetSource,
        config: &CatalogConfig,
    ) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let started = Instant::now();
        let groups = source.fetch_groups()?;
        let outcome = aggregate(&groups, config.sample_cap, config.sample_seed);
        if outcome.truncated {
            info!(
                source_id = %source.id(),
                cap = ?config.sample_cap,
                "sampling cap truncated the aggregated set"
            );
        }
        let snapshot = Arc::new(CatalogSnapshot {
            records: Arc::new(outcome.records),
            truncated: outcome.truncated,
            fetched_at: Utc::now(),
            refreshed: Instant::now(),
        });
        debug!(
            source_id = %source.id(),
            records = snapshot.records.len(),
            refresh_ms = started.elapsed().as_millis() as u64,
            "catalog snapshot refreshed"
        );
        self.entries
            .write()
            .expect("catalog cache poisoned")
            .insert(source.id().to_string(), Arc::clone(&snapshot));
        Ok(snapshot)
    }

    fn cached(&self, source_id: &str) -> Option<Arc<CatalogSnapshot>> {
        self.entries
            .read()
            .expect("catalog cache poisoned")
            .get(source_id)
            .cloned()
    }

    fn refresh_guard(&self, source_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self
            .refresh_locks
            .lock()
            .expect("catalog refresh lock table poisoned");
        Arc::clone(locks.entry(source_id.to_string()).or_default())
    }
}
