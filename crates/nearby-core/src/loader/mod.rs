// crates/nearby-core/src/loader/mod.rs

//! # Data Loader
//!
//! Populates a [`GeoStore`](crate::store::GeoStore) from the two source
//! datasets:
//!
//! - a headerless `name,lat,lon` CSV for the coordinate partition
//! - a directory of per-suburb JSON files for the content partition
//!
//! Both loaders report per-record problems in a
//! [`LoadReport`](crate::common::LoadReport) instead of failing the pass.

mod common_io;
mod content;
mod coordinates;

#[cfg(feature = "builder")]
pub mod builder;

pub use common_io::open_stream;
pub use content::load_content_dir;
pub use coordinates::{load_coordinates, read_coordinates};
