// crates/nearby-core/src/lookup.rs
use crate::error::Result;
use crate::model::{ContentRecord, Nearest};
use crate::search::LinearScan;
use crate::store::GeoStore;
use crate::text::content_key;
use crate::traits::NearestSearch;
use serde::Serialize;

/// Everything a lookup produced, for callers that want more than the record.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub nearest: Nearest,
    /// Content-partition key derived from the nearest coordinate's name.
    pub key: String,
    pub record: ContentRecord,
}

/// Resolves a point to the content record of its nearest suburb.
///
/// Two failures matter to callers and stay distinct:
/// - [`NearbyError::NoCandidates`](crate::NearbyError::NoCandidates): no
///   coordinates are stored at all.
/// - [`NearbyError::NotFound`](crate::NearbyError::NotFound): the nearest
///   suburb has no content record. Expected for many suburbs.
pub struct ContentLookup<'s, R = LinearScan<'s>> {
    store: &'s GeoStore,
    resolver: R,
}

impl<'s> ContentLookup<'s> {
    pub fn new(store: &'s GeoStore) -> Self {
        Self::with_resolver(store, LinearScan::new(store))
    }
}

impl<'s, R: NearestSearch> ContentLookup<'s, R> {
    pub fn with_resolver(store: &'s GeoStore, resolver: R) -> Self {
        Self { store, resolver }
    }

    pub fn resolve_content(&self, lat: f64, lon: f64) -> Result<ContentRecord> {
        self.resolve(lat, lon).map(|r| r.record)
    }

    pub fn resolve(&self, lat: f64, lon: f64) -> Result<Resolution> {
        let nearest = self.resolver.nearest(lat, lon)?;
        let key = content_key(&nearest.coordinate.name).to_string();
        let record = self.store.get::<ContentRecord>(&key)?;
        Ok(Resolution {
            nearest,
            key,
            record,
        })
    }
}
