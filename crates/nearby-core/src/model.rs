// crates/nearby-core/src/model.rs
use serde::{Deserialize, Deserializer, Serialize};

/// A named point, keyed by `name` in the coordinate partition.
///
/// Names are free-form and usually carry a state suffix (`"Bondi NSW"`).
/// Latitude and longitude are taken as-is; nothing checks their range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "suburb")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

/// The content attached to a suburb, stored as JSON in the content partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(rename = "suburb")]
    pub name: String,
    pub state: String,
    pub postcode: String,
    pub lat: f64,
    pub lon: f64,
    /// Generated records may carry `"assets": null` when nothing was fetched.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<Asset>,
}

/// An opaque content asset, kept as raw JSON. Object keys keep their
/// source order, so a record serializes back the way it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Asset(pub serde_json::Value);

/// A stored coordinate paired with its distance to the query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceCandidate {
    pub key: String,
    /// Meters.
    pub distance: f64,
}

/// Resolver output: the winning coordinate and how far away it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nearest {
    pub coordinate: Coordinate,
    /// Meters.
    pub distance: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Asset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Asset>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_record_reads_null_assets_as_empty() {
        let json = r#"{"suburb":"Bondi","state":"NSW","postcode":"2026","lat":-33.89,"lon":151.27,"assets":null}"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Bondi");
        assert!(record.assets.is_empty());
    }

    #[test]
    fn content_record_keeps_asset_payloads_verbatim() {
        let json = r#"{"suburb":"Manly","state":"NSW","postcode":"2095","lat":-33.8,"lon":151.29,
            "assets":[{"id":"abc","assetType":"article","categories":["news"]}]}"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.assets.len(), 1);
        assert_eq!(record.assets[0].0["id"], "abc");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["assets"][0]["categories"][0], "news");
        assert_eq!(back["suburb"], "Manly");
    }

    #[test]
    fn asset_key_order_survives_reserialization() {
        let json = r#"{"suburb":"Coogee","state":"NSW","postcode":"2034","lat":-33.92,"lon":151.26,"assets":[{"title":"Surf","id":"z9","byline":{"name":"Ed","role":"writer"}}]}"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
