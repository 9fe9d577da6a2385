// crates/nearby-core/src/error.rs
use crate::store::Partition;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the store, the resolver and the loaders.
///
/// Query-time callers usually only care about two of these:
/// [`NearbyError::NotFound`] (no content for the resolved suburb) and
/// [`NearbyError::NoCandidates`] (nothing to resolve against at all).
#[derive(Debug, Error)]
pub enum NearbyError {
    #[error("failed to open store at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: redb::DatabaseError,
    },

    #[error("failed to write {partition}/{key}: {reason}")]
    StorageWrite {
        partition: Partition,
        key: String,
        reason: String,
    },

    #[error("{partition}/{key} not found")]
    NotFound { partition: Partition, key: String },

    #[error("failed to decode {partition}/{key}: {reason}")]
    Deserialization {
        partition: Partition,
        key: String,
        reason: String,
    },

    #[error("no coordinates to resolve against")]
    NoCandidates,

    #[error("storage error: {0}")]
    Storage(#[from] redb::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "builder")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl NearbyError {
    pub(crate) fn not_found(partition: Partition, key: &str) -> Self {
        NearbyError::NotFound {
            partition,
            key: key.to_string(),
        }
    }

    pub(crate) fn write_failed(partition: Partition, key: &str, reason: impl ToString) -> Self {
        NearbyError::StorageWrite {
            partition,
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// `true` when a partition or key was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NearbyError::NotFound { .. })
    }

    /// `true` when the coordinate partition had nothing to offer.
    pub fn is_no_candidates(&self) -> bool {
        matches!(self, NearbyError::NoCandidates)
    }
}

// redb reports a distinct error type per stage; funnel them all through redb::Error.
macro_rules! impl_from_redb {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NearbyError {
                fn from(e: $ty) -> Self {
                    NearbyError::Storage(e.into())
                }
            }
        )*
    };
}

impl_from_redb!(
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

pub type Result<T> = std::result::Result<T, NearbyError>;
