//! List snapshot adapter.
//!
//! # Responsibility
//! - Encode the ordered item collection as one JSON array blob.
//! - Decode the blob on startup, degrading to an empty list when it does not
//!   parse and repairing individual records when it does.
//!
//! # Invariants
//! - Every `save`/`clear` performs exactly one backend write.
//! - `load` never fails on malformed content; only backend errors surface.
//! - One bad record never costs the rest of the list.

use super::{DurableStore, StoreResult};
use crate::config::DEFAULT_STORAGE_KEY;
use crate::model::item::{Item, ItemId};
use log::{debug, warn};
use std::collections::HashSet;

/// Serializes item collections into a single named slot.
pub struct ItemSnapshotStore<S: DurableStore> {
    backend: S,
    key: String,
}

impl<S: DurableStore> ItemSnapshotStore<S> {
    /// Uses the default `list` slot.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Reads the persisted collection.
    ///
    /// Absent slots and unparseable content both yield an empty list. Records
    /// with a blank id or value are dropped and repeated ids are reassigned.
    pub fn load(&self) -> StoreResult<Vec<Item>> {
        let Some(blob) = self.backend.read(&self.key)? else {
            debug!("event=snapshot_load module=store status=absent key={}", self.key);
            return Ok(Vec::new());
        };

        match decode_snapshot(&blob) {
            Ok(decoded) => {
                if decoded.dropped > 0 || decoded.reassigned > 0 {
                    warn!(
                        "event=snapshot_load module=store status=repaired key={} item_count={} dropped_count={} reassigned_count={}",
                        self.key,
                        decoded.items.len(),
                        decoded.dropped,
                        decoded.reassigned
                    );
                } else {
                    debug!(
                        "event=snapshot_load module=store status=ok key={} item_count={}",
                        self.key,
                        decoded.items.len()
                    );
                }
                Ok(decoded.items)
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=store status=degraded key={} blob_len={} error={}",
                    self.key,
                    blob.len(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Writes the full collection in one call.
    pub fn save(&mut self, items: &[Item]) -> StoreResult<()> {
        let blob = serde_json::to_string(items)?;
        self.backend.write(&self.key, &blob)
    }

    /// Drops the slot entirely.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.backend.remove(&self.key)
    }
}

struct DecodedSnapshot {
    items: Vec<Item>,
    dropped: usize,
    reassigned: usize,
}

fn decode_snapshot(blob: &str) -> Result<DecodedSnapshot, serde_json::Error> {
    let records: Vec<Item> = serde_json::from_str(blob)?;

    let mut decoded = DecodedSnapshot {
        items: Vec::with_capacity(records.len()),
        dropped: 0,
        reassigned: 0,
    };
    let mut seen = HashSet::with_capacity(records.len());
    for mut item in records {
        if item.validate().is_err() {
            decoded.dropped += 1;
            continue;
        }
        if seen.contains(&item.id) {
            decoded.reassigned += 1;
            item.id = ItemId::generate();
            while seen.contains(&item.id) {
                item.id = ItemId::generate();
            }
        }
        seen.insert(item.id.clone());
        decoded.items.push(item);
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::ItemSnapshotStore;
    use crate::model::item::{Item, ItemId};
    use crate::store::MemoryDurableStore;

    fn store_with(blob: &str) -> ItemSnapshotStore<MemoryDurableStore> {
        ItemSnapshotStore::new(MemoryDurableStore::with_slot("list", blob))
    }

    #[test]
    fn absent_slot_loads_as_empty() {
        let store = ItemSnapshotStore::new(MemoryDurableStore::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn legacy_timestamp_ids_are_accepted() {
        let store = store_with(r#"[{"id":"1700000000000","value":"milk"}]"#);
        let items = store.load().unwrap();
        assert_eq!(items, vec![Item::with_id("1700000000000", "milk")]);
    }

    #[test]
    fn unparseable_blobs_degrade_to_empty() {
        for blob in [
            "not json",
            r#"{"id":"1","value":"milk"}"#,
            r#"[{"id":"1"}]"#,
            r#"[{"id":"1","value":""}]"#,
        ] {
            assert!(store_with(blob).load().unwrap().is_empty(), "blob: {blob}");
        }
    }

    #[test]
    fn repeated_ids_are_reassigned_and_order_kept() {
        let store = store_with(
            r#"[{"id":"1700000000000","value":"milk"},{"id":"1700000000000","value":"eggs"},{"id":"1700000000001","value":"jam"}]"#,
        );

        let items = store.load().unwrap();

        let values: Vec<&str> = items.iter().map(|item| item.value.as_str()).collect();
        assert_eq!(values, vec!["milk", "eggs", "jam"]);
        assert_eq!(items[0].id, ItemId::from("1700000000000"));
        assert_eq!(items[2].id, ItemId::from("1700000000001"));
        assert_ne!(items[1].id, items[0].id);
        assert_ne!(items[1].id, items[2].id);
    }

    #[test]
    fn blank_records_are_dropped_and_the_rest_kept() {
        let store = store_with(
            r#"[{"id":"1","value":"milk"},{"id":"2","value":"   "},{"id":"","value":"tea"},{"id":"3","value":"jam"}]"#,
        );

        let items = store.load().unwrap();

        assert_eq!(
            items,
            vec![Item::with_id("1", "milk"), Item::with_id("3", "jam")]
        );
    }

    #[test]
    fn save_writes_once_and_preserves_order() {
        let mut store = ItemSnapshotStore::new(MemoryDurableStore::new());
        let items = vec![Item::with_id("a", "bread"), Item::with_id("b", "eggs")];

        store.save(&items).unwrap();

        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(store.load().unwrap(), items);
    }
}
