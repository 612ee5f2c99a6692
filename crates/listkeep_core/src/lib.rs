//! Core domain logic for listkeep.
//! This crate is the single source of truth for list invariants.

pub mod config;
pub mod db;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod notify;
pub mod registry;
pub mod service;
pub mod store;
pub mod view;

pub use config::{SessionConfig, StorageLocation, DEFAULT_NOTICE_TTL, DEFAULT_STORAGE_KEY};
pub use interaction::machine::{InteractionMode, InteractionState, SubmitError, SubmitOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use notify::{Notice, NoticeBoard, Notifier, Severity};
pub use registry::item_registry::{ItemRegistry, RegistryError, RegistryResult};
pub use service::list_session::{ListSession, SessionEvent};
pub use store::{
    DurableStore, ItemSnapshotStore, MemoryDurableStore, SqliteDurableStore, StoreError,
    StoreResult,
};
pub use view::{ListView, Row, RowAction, RowTrigger, TextListView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
