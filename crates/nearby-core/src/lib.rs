// crates/nearby-core/src/lib.rs

//! Nearest-suburb resolution over a redb-backed store.
//!
//! ```no_run
//! use nearby_core::{loader, ContentLookup, GeoStore};
//!
//! let store = GeoStore::open("news_nearby.db")?;
//! loader::load_coordinates(&store, "lat_lon.csv")?;
//! loader::load_content_dir(&store, "records")?;
//!
//! let record = ContentLookup::new(&store).resolve_content(-33.88, 151.26)?;
//! println!("{} ({})", record.name, record.postcode);
//! # Ok::<(), nearby_core::NearbyError>(())
//! ```

pub mod common;
pub mod distance;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod search;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{LoadReport, StoreStats};
pub use crate::error::{NearbyError, Result};
pub use crate::lookup::{ContentLookup, Resolution};
pub use crate::model::{Asset, ContentRecord, Coordinate, DistanceCandidate, Nearest};
pub use crate::search::LinearScan;
pub use crate::store::{GeoStore, Partition};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::NearestSearch;
