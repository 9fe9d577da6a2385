use nearby_core::loader::{load_content_dir, load_coordinates};
use nearby_core::{ContentLookup, GeoStore, LinearScan, NearbyError, NearestSearch};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

const BONDI_RECORD: &str = r#"{"suburb":"Bondi","state":"NSW","postcode":"2026","lat":-33.89,"lon":151.27,"assets":[{"id":"story-1","assetType":"article"}]}"#;

fn seed(dir: &Path) -> GeoStore {
    let csv = dir.join("lat_lon.csv");
    fs::write(&csv, "Bondi NSW,-33.89,151.27\nManly NSW,-33.80,151.29\n").unwrap();

    let records = dir.join("records");
    fs::create_dir(&records).unwrap();
    fs::write(records.join("bondi.json"), BONDI_RECORD).unwrap();

    let store = GeoStore::open(dir.join("news_nearby.db")).unwrap();
    let coords = load_coordinates(&store, &csv).unwrap();
    assert_eq!(coords.loaded, 2);
    let content = load_content_dir(&store, &records).unwrap();
    assert_eq!(content.loaded, 1);
    store
}

#[test]
fn query_near_bondi_returns_bondi_content() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed(dir.path());

    let nearest = LinearScan::new(&store).find_nearest(-33.88, 151.26).unwrap();
    assert_eq!(nearest.name, "Bondi NSW");

    let resolution = ContentLookup::new(&store).resolve(-33.88, 151.26).unwrap();
    assert_eq!(resolution.key, "Bondi");
    assert_eq!(resolution.record.postcode, "2026");
    assert_eq!(resolution.record.assets.len(), 1);
    assert_eq!(resolution.record.assets[0].0["id"], "story-1");
}

#[test]
fn query_near_manly_is_not_found_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed(dir.path());

    match ContentLookup::new(&store).resolve_content(-33.79, 151.30) {
        Err(NearbyError::NotFound { key, .. }) => assert_eq!(key, "Manly"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn lookups_never_mutate_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed(dir.path());
    let before = store.stats().unwrap();

    let lookup = ContentLookup::new(&store);
    for _ in 0..3 {
        let _ = lookup.resolve_content(-33.88, 151.26);
        let _ = lookup.resolve_content(-33.79, 151.30);
    }
    assert_eq!(store.stats().unwrap(), before);
}

#[test]
fn concurrent_readers_agree() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(seed(dir.path()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                ContentLookup::new(&store)
                    .resolve_content(-33.88, 151.26)
                    .map(|r| r.name)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "Bondi");
    }
}
