use super::Partition;
use crate::model::{ContentRecord, Coordinate};

/// A value type that knows which partition it lives in and how it is encoded.
///
/// Coordinates are small and only ever written by this crate, so they use
/// bincode. Content records arrive as JSON files and are kept as JSON.
pub trait Record: Sized {
    const PARTITION: Partition;

    fn encode(&self) -> Result<Vec<u8>, String>;
    fn decode(bytes: &[u8]) -> Result<Self, String>;
}

impl Record for Coordinate {
    const PARTITION: Partition = Partition::Coordinates;

    fn encode(&self) -> Result<Vec<u8>, String> {
        bincode::serialize(self).map_err(|e| e.to_string())
    }

    fn decode(bytes: &[u8]) -> Result<Self, String> {
        bincode::deserialize(bytes).map_err(|e| e.to_string())
    }
}

impl Record for ContentRecord {
    const PARTITION: Partition = Partition::ContentRecords;

    fn encode(&self) -> Result<Vec<u8>, String> {
        serde_json::to_vec(self).map_err(|e| e.to_string())
    }

    fn decode(bytes: &[u8]) -> Result<Self, String> {
        serde_json::from_slice(bytes).map_err(|e| e.to_string())
    }
}
