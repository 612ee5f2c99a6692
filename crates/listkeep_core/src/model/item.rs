//! Item domain model.
//!
//! # Responsibility
//! - Define the `{id, value}` record persisted in the list slot.
//! - Provide identity generation and validation helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `value` is non-empty once the item is accepted by the registry.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier of one list item.
///
/// Freshly created items get a UUID v4. Rehydrated items keep whatever
/// non-blank token was stored, so older numeric ids still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generates a collision-resistant identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failures for item records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Display value is empty or whitespace only.
    EmptyValue,
    /// Identifier is empty or whitespace only.
    EmptyId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "item value cannot be empty"),
            Self::EmptyId => write!(f, "item id cannot be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// One named entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// User-supplied display text, stored exactly as submitted.
    pub value: String,
}

impl Item {
    /// Creates a new item with a generated id.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_id(ItemId::generate(), value)
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used when rehydrating persisted records.
    pub fn with_id(id: impl Into<ItemId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Checks the record invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ItemValidationError::EmptyId);
        }
        if is_blank(&self.value) {
            return Err(ItemValidationError::EmptyValue);
        }
        Ok(())
    }
}

/// Returns whether a submitted value counts as empty.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{is_blank, Item, ItemId, ItemValidationError};

    #[test]
    fn generated_ids_are_distinct() {
        let first = ItemId::generate();
        let second = ItemId::generate();
        assert_ne!(first, second);
    }

    #[test]
    fn validate_rejects_blank_value_and_id() {
        assert_eq!(
            Item::new("   ").validate(),
            Err(ItemValidationError::EmptyValue)
        );
        assert_eq!(
            Item::with_id("", "milk").validate(),
            Err(ItemValidationError::EmptyId)
        );
        assert!(Item::with_id("1700000000000", "milk").validate().is_ok());
    }

    #[test]
    fn serializes_as_flat_id_value_record() {
        let item = Item::with_id("42", "eggs");
        let json = serde_json::to_string(&item).expect("item should serialize");
        assert_eq!(json, r#"{"id":"42","value":"eggs"}"#);
    }

    #[test]
    fn blank_detection_ignores_surrounding_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank(" milk "));
    }
}
