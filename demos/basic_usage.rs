//! Basic usage example for nearby-rs
//!
//! This example demonstrates how to:
//! - Open a store and load a couple of suburbs
//! - Find the nearest suburb to a point
//! - Resolve that suburb's content record, and tell "no content" apart
//!   from "no data at all"

use nearby_core::{
    ContentLookup, ContentRecord, Coordinate, GeoStore, LinearScan, NearestSearch, Result,
};

fn main() -> Result<()> {
    println!("=== nearby-rs Basic Usage Example ===\n");

    let dir = tempfile::tempdir()?;
    let store = GeoStore::open(dir.path().join("news_nearby.db"))?;

    // Example 1: Load coordinates and one content record
    println!("--- Example 1: Load data ---");
    for coord in [
        Coordinate::new("Bondi NSW", -33.89, 151.27),
        Coordinate::new("Manly NSW", -33.80, 151.29),
    ] {
        store.put(&coord.name, &coord)?;
    }
    let bondi = ContentRecord {
        name: "Bondi".to_string(),
        state: "NSW".to_string(),
        postcode: "2026".to_string(),
        lat: -33.89,
        lon: 151.27,
        assets: Vec::new(),
    };
    store.put(&bondi.name, &bondi)?;
    let stats = store.stats()?;
    println!(
        "Loaded {} coordinates and {} content records\n",
        stats.coordinates, stats.content_records
    );

    // Example 2: Nearest suburb
    println!("--- Example 2: Nearest suburb ---");
    let nearest = LinearScan::new(&store).nearest(-33.88, 151.26)?;
    println!(
        "Nearest to (-33.88, 151.26): {} ({:.0} m)\n",
        nearest.coordinate.name, nearest.distance
    );

    // Example 3: Content lookup
    println!("--- Example 3: Content lookup ---");
    let lookup = ContentLookup::new(&store);
    for (lat, lon) in [(-33.88, 151.26), (-33.79, 151.30)] {
        match lookup.resolve_content(lat, lon) {
            Ok(record) => println!("  ({lat}, {lon}) -> {} {}", record.name, record.postcode),
            Err(e) if e.is_not_found() => println!("  ({lat}, {lon}) -> no content ({e})"),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
