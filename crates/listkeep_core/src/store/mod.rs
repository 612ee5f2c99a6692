//! Durable key-value slots and the list snapshot adapter.
//!
//! # Responsibility
//! - Define the string-slot contract the list is persisted through.
//! - Provide SQLite-backed and in-process slot implementations.
//! - Serialize the whole item collection into one named slot.
//!
//! # Invariants
//! - Slots hold opaque strings; only `ItemSnapshotStore` knows the format.
//! - The snapshot adapter never keeps a live reference to registry items.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod snapshot;
pub mod sqlite;

pub use memory::MemoryDurableStore;
pub use snapshot::ItemSnapshotStore;
pub use sqlite::SqliteDurableStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a slot backend or the snapshot codec.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize list snapshot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Named string slots that survive process restarts.
pub trait DurableStore {
    /// Returns the blob stored under `key`, or `None` when the slot is absent.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the blob stored under `key`.
    fn write(&mut self, key: &str, blob: &str) -> StoreResult<()>;
    /// Drops the slot. Removing an absent slot succeeds.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
