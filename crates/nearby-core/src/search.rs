// crates/nearby-core/src/search.rs
use crate::distance::distance;
use crate::error::{NearbyError, Result};
use crate::model::{Coordinate, DistanceCandidate, Nearest};
use crate::store::GeoStore;
use crate::traits::NearestSearch;

/// Full scan of the coordinate partition.
///
/// O(n) per query. Fine for a few thousand suburbs.
#[derive(Clone, Copy)]
pub struct LinearScan<'s> {
    store: &'s GeoStore,
}

impl<'s> LinearScan<'s> {
    pub fn new(store: &'s GeoStore) -> Self {
        Self { store }
    }

    /// The `limit` closest candidates, nearest first. Equal distances are
    /// ordered by key.
    pub fn ranked(&self, lat: f64, lon: f64, limit: usize) -> Result<Vec<DistanceCandidate>> {
        let mut out = Vec::new();
        self.store.for_each::<Coordinate, _>(|key, c| {
            let d = distance(lat, lon, c.lat, c.lon);
            if !d.is_nan() {
                out.push(DistanceCandidate {
                    key: key.to_string(),
                    distance: d,
                });
            }
            Ok(())
        })?;

        // Keys arrive sorted and the sort is stable, so ties keep key order.
        out.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        out.truncate(limit);
        Ok(out)
    }
}

impl NearestSearch for LinearScan<'_> {
    fn nearest(&self, lat: f64, lon: f64) -> Result<Nearest> {
        let mut best: Option<Nearest> = None;

        self.store.for_each::<Coordinate, _>(|_, c| {
            let d = distance(lat, lon, c.lat, c.lon);
            // No candidate yet behaves like +inf. Strict `<` keeps the first
            // (lowest-key) match on ties and never picks NaN.
            let bound = best.as_ref().map_or(f64::INFINITY, |b| b.distance);
            if d < bound {
                best = Some(Nearest {
                    coordinate: c,
                    distance: d,
                });
            }
            Ok(())
        })?;

        let nearest = best.ok_or(NearbyError::NoCandidates)?;
        tracing::debug!(
            lat,
            lon,
            name = %nearest.coordinate.name,
            distance = nearest.distance,
            "resolved nearest coordinate"
        );
        Ok(nearest)
    }
}
