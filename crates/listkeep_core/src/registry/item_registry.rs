//! Item registry contracts and implementation.
//!
//! # Invariants
//! - Each of `create`, `update`, `delete` and `clear_all` performs exactly one
//!   snapshot write before returning.
//! - A failed snapshot write restores the in-memory collection, so memory and
//!   storage never drift apart.
//! - Values are validated before any mutation.

use crate::model::item::{is_blank, Item, ItemId, ItemValidationError};
use crate::store::{DurableStore, ItemSnapshotStore, StoreError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry operation failure.
#[derive(Debug)]
pub enum RegistryError {
    Validation(ItemValidationError),
    NotFound(ItemId),
    Store(StoreError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ItemValidationError> for RegistryError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RegistryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Authoritative owner of the list items.
pub struct ItemRegistry<S: DurableStore> {
    items: Vec<Item>,
    store: ItemSnapshotStore<S>,
}

impl<S: DurableStore> ItemRegistry<S> {
    /// Creates an empty registry. Call `load_all` to rehydrate.
    pub fn new(store: ItemSnapshotStore<S>) -> Self {
        Self {
            items: Vec::new(),
            store,
        }
    }

    /// Replaces in-memory state with the persisted collection.
    ///
    /// Malformed persisted data yields an empty list; only backend failures
    /// are returned as errors.
    pub fn load_all(&mut self) -> RegistryResult<&[Item]> {
        self.items = self.store.load()?;
        info!(
            "event=registry_load module=registry status=ok item_count={}",
            self.items.len()
        );
        Ok(&self.items)
    }

    /// Appends a new item with a fresh id.
    pub fn create(&mut self, value: impl Into<String>) -> RegistryResult<Item> {
        let mut item = Item::new(value);
        item.validate()?;
        while self.contains(&item.id) {
            item.id = ItemId::generate();
        }

        self.items.push(item.clone());
        if let Err(err) = self.persist("create") {
            self.items.pop();
            return Err(err);
        }

        debug!(
            "event=item_create module=registry status=ok item_count={}",
            self.items.len()
        );
        Ok(item)
    }

    /// Replaces the value of an existing item, keeping its id and position.
    pub fn update(&mut self, id: &ItemId, value: impl Into<String>) -> RegistryResult<Item> {
        let value = value.into();
        if is_blank(&value) {
            return Err(ItemValidationError::EmptyValue.into());
        }

        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        let previous = std::mem::replace(&mut self.items[index].value, value);
        if let Err(err) = self.persist("update") {
            self.items[index].value = previous;
            return Err(err);
        }

        debug!("event=item_update module=registry status=ok");
        Ok(self.items[index].clone())
    }

    /// Removes an item if present. Deleting an absent id is not an error.
    ///
    /// Returns the removed item, if any.
    pub fn delete(&mut self, id: &ItemId) -> RegistryResult<Option<Item>> {
        let removed = self
            .position(id)
            .map(|index| (index, self.items.remove(index)));

        if let Err(err) = self.persist("delete") {
            if let Some((index, item)) = removed {
                self.items.insert(index, item);
            }
            return Err(err);
        }

        debug!(
            "event=item_delete module=registry status=ok removed={} item_count={}",
            removed.is_some(),
            self.items.len()
        );
        Ok(removed.map(|(_, item)| item))
    }

    /// Empties the collection and drops the persisted slot.
    pub fn clear_all(&mut self) -> RegistryResult<()> {
        let previous = std::mem::take(&mut self.items);
        if let Err(err) = self.store.clear() {
            error!("event=registry_persist module=registry status=error op=clear_all error={err}");
            self.items = previous;
            return Err(err.into());
        }

        info!(
            "event=registry_clear module=registry status=ok removed_count={}",
            previous.len()
        );
        Ok(())
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn store(&self) -> &ItemSnapshotStore<S> {
        &self.store
    }

    pub fn into_store(self) -> ItemSnapshotStore<S> {
        self.store
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    fn persist(&mut self, op: &str) -> RegistryResult<()> {
        self.store.save(&self.items).map_err(|err| {
            error!("event=registry_persist module=registry status=error op={op} error={err}");
            RegistryError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemRegistry, RegistryError};
    use crate::db::DbError;
    use crate::model::item::ItemId;
    use crate::store::{DurableStore, ItemSnapshotStore, StoreError, StoreResult};

    /// Backend whose writes always fail.
    struct BrokenStore;

    impl DurableStore for BrokenStore {
        fn read(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(Some(r#"[{"id":"a","value":"bread"}]"#.to_string()))
        }

        fn write(&mut self, _key: &str, _blob: &str) -> StoreResult<()> {
            Err(StoreError::Db(DbError::Io(std::io::Error::other("disk full"))))
        }

        fn remove(&mut self, key: &str) -> StoreResult<()> {
            self.write(key, "")
        }
    }

    #[test]
    fn failed_writes_roll_back_memory_state() {
        let mut registry = ItemRegistry::new(ItemSnapshotStore::new(BrokenStore));
        registry.load_all().unwrap();
        let id = ItemId::from("a");

        assert!(matches!(registry.create("milk"), Err(RegistryError::Store(_))));
        assert!(matches!(registry.update(&id, "rye"), Err(RegistryError::Store(_))));
        assert!(matches!(registry.delete(&id), Err(RegistryError::Store(_))));
        assert!(matches!(registry.clear_all(), Err(RegistryError::Store(_))));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).map(|item| item.value.as_str()), Some("bread"));
    }
}
