//! Visual projection of the registry.
//!
//! # Responsibility
//! - Mirror registry contents into rows without owning item state.
//! - Expose per-row triggers that carry the row's item id.
//!
//! # Invariants
//! - Rows are located by item id, never by position relative to other rows.
//! - The container is shown iff the projected list is non-empty.

pub mod text_list;

use crate::model::item::{Item, ItemId};

pub use text_list::{Row, RowAction, TextListView};

/// Intent emitted by a row control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTrigger {
    EditRequest(ItemId),
    DeleteRequest(ItemId),
}

/// Rendering surface driven by the session.
pub trait ListView {
    /// Clears and redraws every row from a registry snapshot.
    fn render_all(&mut self, items: &[Item]);
    /// Appends one row.
    fn render_created(&mut self, item: &Item);
    /// Rewrites the text of the row matching `item.id`.
    fn render_updated(&mut self, item: &Item);
    /// Drops the row matching `id`.
    fn render_removed(&mut self, id: &ItemId);
    fn set_container_visibility(&mut self, has_items: bool);
}
