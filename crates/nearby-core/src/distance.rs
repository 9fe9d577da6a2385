//! Great-circle distance on a spherical Earth.
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east (-180 to 180)
//! - Distance: meters

/// Earth's radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;

/// Haversine distance between two points, in meters.
///
/// Identical points give exactly `0.0`, and swapping the two points gives
/// the same result.
///
/// # Example
///
/// ```
/// use nearby_core::distance::distance;
///
/// // One degree of latitude along the prime meridian.
/// let d = distance(0.0, 0.0, 1.0, 0.0);
/// assert!((d - 111_318.8).abs() < 1.0);
/// ```
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair outside [0, 1] near antipodes.
    2.0 * EARTH_RADIUS_M * a.clamp(0.0, 1.0).sqrt().asin()
}
