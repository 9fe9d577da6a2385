// crates/nearby-core/src/loader/builder.rs
#![cfg(feature = "builder")]

//! Offline record generation: fetch assets from the content API and write
//! one JSON record per suburb, ready for [`load_content_dir`].
//!
//! [`load_content_dir`]: super::load_content_dir

use crate::error::Result;
use crate::model::{Asset, ContentRecord};
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

pub const CONTENT_API_ENDPOINT: &str = "https://api.ffx.io/api/content/v0/assets/";

/// Where the record for `name` lands: `<dir>/<lowercased name>.json`.
pub fn record_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name.to_lowercase()))
}

// -----------------------------------------------------------------------------
// BUILDER
// -----------------------------------------------------------------------------

pub struct RecordBuilder {
    client: Client,
    endpoint: String,
}

impl RecordBuilder {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }

    fn asset_url(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), id)
    }

    /// Fetches each asset in order. Blank ids are ignored; failed requests
    /// and undecodable bodies are logged and left out.
    pub fn fetch_assets<'a, I>(&self, ids: I) -> Vec<Asset>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut assets = Vec::new();
        for id in ids.into_iter().map(str::trim).filter(|id| !id.is_empty()) {
            let url = self.asset_url(id);
            let fetched = self
                .client
                .get(&url)
                .send()
                .and_then(|res| res.error_for_status())
                .and_then(|res| res.json::<Asset>());
            match fetched {
                Ok(asset) => assets.push(asset),
                Err(e) => tracing::warn!(%url, error = %e, "skipping asset"),
            }
        }
        assets
    }

    /// Fetches the assets for `record` and writes the result to `dir`.
    /// Returns the path written.
    pub fn build<'a, I>(&self, dir: &Path, mut record: ContentRecord, asset_ids: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = &'a str>,
    {
        record.assets = self.fetch_assets(asset_ids);
        write_record(dir, &record)
    }
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

/// Serializes `record` to [`record_path`] under `dir`.
pub fn write_record(dir: &Path, record: &ContentRecord) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = record_path(dir, &record.name);

    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer(&mut writer, record)?;
    writer.flush()?;

    tracing::info!(suburb = %record.name, path = %path.display(), assets = record.assets.len(), "record written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_content_dir;
    use crate::store::GeoStore;

    fn pyrmont() -> ContentRecord {
        ContentRecord {
            name: "Pyrmont".to_string(),
            state: "NSW".to_string(),
            postcode: "2009".to_string(),
            lat: -33.87,
            lon: 151.19,
            assets: vec![Asset(serde_json::json!({"id": "a1"}))],
        }
    }

    #[test]
    fn record_paths_are_lowercased() {
        assert_eq!(
            record_path(Path::new("/tmp"), "Pyrmont"),
            PathBuf::from("/tmp/pyrmont.json")
        );
    }

    #[test]
    fn asset_urls_join_cleanly() {
        let builder = RecordBuilder::new(CONTENT_API_ENDPOINT).unwrap();
        assert_eq!(
            builder.asset_url("abc"),
            "https://api.ffx.io/api/content/v0/assets/abc"
        );
    }

    #[test]
    fn blank_ids_fetch_nothing() {
        let builder = RecordBuilder::new("http://127.0.0.1:9").unwrap();
        assert!(builder.fetch_assets(["", "  "]).is_empty());
    }

    #[test]
    fn written_records_load_back_under_the_capitalised_key() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("records");
        let path = write_record(&records, &pyrmont()).unwrap();
        assert!(path.ends_with("pyrmont.json"));

        let store = GeoStore::open(dir.path().join("gen.redb")).unwrap();
        load_content_dir(&store, &records).unwrap();
        assert_eq!(store.get::<ContentRecord>("Pyrmont").unwrap(), pyrmont());
    }
}
