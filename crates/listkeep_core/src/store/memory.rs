//! In-process slot storage.
//!
//! Backs ephemeral sessions (`--memory`) and lets tests observe how many
//! times the registry wrote through.

use super::{DurableStore, StoreResult};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryDurableStore {
    slots: HashMap<String, String>,
    writes: usize,
}

impl MemoryDurableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already populated.
    pub fn with_slot(key: &str, blob: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), blob.into());
        Self { slots, writes: 0 }
    }

    /// Number of `write` plus `remove` calls served so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl DurableStore for MemoryDurableStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> StoreResult<()> {
        self.writes += 1;
        self.slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.writes += 1;
        self.slots.remove(key);
        Ok(())
    }
}
