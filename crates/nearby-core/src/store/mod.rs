// crates/nearby-core/src/store/mod.rs

//! # GeoRecord Store
//!
//! One redb file holding two independent tables:
//!
//! | Partition        | Key                     | Value                    |
//! |------------------|-------------------------|--------------------------|
//! | `coordinates`    | suburb name (`Bondi NSW`) | bincode [`Coordinate`]   |
//! | `content_records`| sanitized name (`Bondi`)  | JSON [`ContentRecord`]   |
//!
//! Every `put` runs in its own write transaction and is durable once it
//! returns. Reads run in read transactions, so any number of lookups can
//! proceed while the store is shared behind an `Arc`.
//!
//! [`Coordinate`]: crate::model::Coordinate
//! [`ContentRecord`]: crate::model::ContentRecord

use crate::common::StoreStats;
use crate::error::{NearbyError, Result};
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition, TableError};
use std::fmt;
use std::path::{Path, PathBuf};

mod record;

pub use record::Record;

type Table = TableDefinition<'static, &'static str, &'static [u8]>;

/// A named logical table inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Coordinates,
    ContentRecords,
}

impl Partition {
    pub fn name(self) -> &'static str {
        match self {
            Partition::Coordinates => "coordinates",
            Partition::ContentRecords => "content_records",
        }
    }

    fn table(self) -> Table {
        TableDefinition::new(self.name())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned handle to the on-disk store.
///
/// Open it once at startup and hand references (or an `Arc`) to the
/// resolver and the lookup façade.
pub struct GeoStore {
    db: Database,
    path: PathBuf,
}

impl GeoStore {
    /// Opens the store at `path`, creating the file if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let db = Database::create(&path).map_err(|source| NearbyError::Open {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self { db, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // -----------------------------------------------------------------------
    // TYPED ACCESS
    // -----------------------------------------------------------------------

    /// Upserts `value` under `key` in the record type's partition.
    pub fn put<T: Record>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = value
            .encode()
            .map_err(|reason| NearbyError::write_failed(T::PARTITION, key, reason))?;
        self.put_raw(T::PARTITION, key, &bytes)
    }

    /// Reads and decodes the record stored under `key`.
    pub fn get<T: Record>(&self, key: &str) -> Result<T> {
        let bytes = self.get_raw(T::PARTITION, key)?;
        decode(key, &bytes)
    }

    /// Visits every record of type `T` in key order.
    ///
    /// A record that fails to decode stops the pass with
    /// [`NearbyError::Deserialization`].
    pub fn for_each<T, F>(&self, mut visit: F) -> Result<()>
    where
        T: Record,
        F: FnMut(&str, T) -> Result<()>,
    {
        self.for_each_raw(T::PARTITION, |key, bytes| visit(key, decode(key, bytes)?))
    }

    // -----------------------------------------------------------------------
    // RAW ACCESS
    // -----------------------------------------------------------------------

    /// Upserts raw bytes. Creates the partition on first write.
    pub fn put_raw(&self, partition: Partition, key: &str, value: &[u8]) -> Result<()> {
        let write = || -> std::result::Result<(), redb::Error> {
            let txn = self.db.begin_write()?;
            {
                let mut table = txn.open_table(partition.table())?;
                table.insert(key, value)?;
            }
            txn.commit()?;
            Ok(())
        };
        write().map_err(|e| NearbyError::write_failed(partition, key, e))
    }

    /// Returns a copy of the bytes stored under `key`.
    pub fn get_raw(&self, partition: Partition, key: &str) -> Result<Vec<u8>> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(partition.table()) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => {
                return Err(NearbyError::not_found(partition, key))
            }
            Err(e) => return Err(e.into()),
        };

        let value = table.get(key)?.map(|guard| guard.value().to_vec());
        value.ok_or_else(|| NearbyError::not_found(partition, key))
    }

    /// Visits every key/value pair of `partition` in lexicographic key order,
    /// inside a single read transaction. An absent partition is empty.
    pub fn for_each_raw<F>(&self, partition: Partition, mut visit: F) -> Result<()>
    where
        F: FnMut(&str, &[u8]) -> Result<()>,
    {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(partition.table()) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for entry in table.iter()? {
            let (key, value) = entry?;
            visit(key.value(), value.value())?;
        }
        Ok(())
    }

    /// Number of entries in `partition` (0 if it was never written).
    pub fn len(&self, partition: Partition) -> Result<u64> {
        let txn = self.db.begin_read()?;
        let len = match txn.open_table(partition.table()) {
            Ok(table) => table.len()?,
            Err(TableError::TableDoesNotExist(_)) => 0,
            Err(e) => return Err(e.into()),
        };
        Ok(len)
    }

    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            coordinates: self.len(Partition::Coordinates)?,
            content_records: self.len(Partition::ContentRecords)?,
        })
    }
}

fn decode<T: Record>(key: &str, bytes: &[u8]) -> Result<T> {
    T::decode(bytes).map_err(|reason| NearbyError::Deserialization {
        partition: T::PARTITION,
        key: key.to_string(),
        reason,
    })
}
