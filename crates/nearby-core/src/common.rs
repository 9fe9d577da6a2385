// crates/nearby-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the store.
///
/// Returned by [`GeoStore::stats`](crate::store::GeoStore::stats); counts
/// reflect what is on disk right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub coordinates: u64,
    pub content_records: u64,
}

/// Outcome of one load pass.
///
/// `skipped` counts input that could not be parsed, `failed` counts parsed
/// records the store refused. Neither aborts the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub failed: usize,
}
