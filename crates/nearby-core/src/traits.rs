// crates/nearby-core/src/traits.rs
use crate::error::Result;
use crate::model::{Coordinate, Nearest};

/// Nearest-neighbour lookup over the stored coordinates.
///
/// [`LinearScan`](crate::search::LinearScan) is the only implementation
/// today. A spatial index can slot in behind this trait without touching
/// [`ContentLookup`](crate::lookup::ContentLookup).
pub trait NearestSearch {
    /// Returns the stored coordinate closest to `(lat, lon)` together with
    /// its distance in meters.
    ///
    /// Fails with [`NearbyError::NoCandidates`](crate::NearbyError::NoCandidates)
    /// when there is nothing to compare against.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nearby_core::{GeoStore, LinearScan, NearestSearch};
    ///
    /// let store = GeoStore::open("news_nearby.db").unwrap();
    /// let nearest = LinearScan::new(&store).nearest(-33.88, 151.26).unwrap();
    /// println!("{} is {:.0} m away", nearest.coordinate.name, nearest.distance);
    /// ```
    fn nearest(&self, lat: f64, lon: f64) -> Result<Nearest>;

    /// Like [`NearestSearch::nearest`], without the distance.
    fn find_nearest(&self, lat: f64, lon: f64) -> Result<Coordinate> {
        self.nearest(lat, lon).map(|n| n.coordinate)
    }
}
