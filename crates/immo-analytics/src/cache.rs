//! Snapshot memoisation keyed by dataset revision and query.

use std::collections::HashMap;
use std::sync::Arc;

use immo_core::Dataset;
use parking_lot::Mutex;
use tracing::debug;

use crate::analytics::DashboardSnapshot;
use crate::config::AnalyticsConfig;

/// Caches dashboard snapshots for one dataset lineage.
///
/// Entries are keyed by `(revision, query)`. Computing a snapshot for a newer
/// revision evicts every entry of older revisions. Callers that swap in an
/// unrelated dataset whose revision may collide must call
/// [`invalidate`](Self::invalidate).
pub struct DashboardCache {
    config: AnalyticsConfig,
    entries: Mutex<HashMap<(u64, String), Arc<DashboardSnapshot>>>,
}

impl DashboardCache {
    /// Creates an empty cache computing with `config`.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The configuration snapshots are computed with.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Returns the snapshot for `dataset` and `query`, computing it on a miss.
    pub fn snapshot(&self, dataset: &Dataset, query: &str) -> Arc<DashboardSnapshot> {
        let key = (dataset.revision(), query.to_string());

        if let Some(hit) = self.entries.lock().get(&key) {
            debug!(revision = key.0, query, "dashboard cache hit");
            return Arc::clone(hit);
        }

        debug!(revision = key.0, query, "dashboard cache miss");
        let snapshot = Arc::new(DashboardSnapshot::calculate(dataset, query, &self.config));

        let mut entries = self.entries.lock();
        entries.retain(|(revision, _), _| *revision >= key.0);
        entries.insert(key, Arc::clone(&snapshot));
        snapshot
    }

    /// Number of cached snapshots.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops every cached snapshot.
    pub fn invalidate(&self) {
        let mut entries = self.entries.lock();
        if !entries.is_empty() {
            debug!(entries = entries.len(), "dashboard cache invalidated");
        }
        entries.clear();
    }
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}
