//! Plain-text list view used by the terminal front end.

use super::{ListView, RowTrigger};
use crate::model::item::{Item, ItemId};
use log::warn;
use std::fmt::Write as _;

/// One projected row. `id` is row metadata; `title` is the displayed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ItemId,
    pub title: String,
}

/// Control on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

#[derive(Debug, Default)]
pub struct TextListView {
    rows: Vec<Row>,
    container_visible: bool,
}

impl TextListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_container_visible(&self) -> bool {
        self.container_visible
    }

    /// Fires a control on the row shown at `position` (1-based, as displayed).
    ///
    /// The returned trigger carries the row's own id.
    pub fn trigger(&self, position: usize, action: RowAction) -> Option<RowTrigger> {
        let row = position.checked_sub(1).and_then(|index| self.rows.get(index))?;
        let id = row.id.clone();
        Some(match action {
            RowAction::Edit => RowTrigger::EditRequest(id),
            RowAction::Delete => RowTrigger::DeleteRequest(id),
        })
    }

    /// Text rendering of the visible list. Empty when the container is hidden.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.container_visible {
            return out;
        }
        for (index, row) in self.rows.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", index + 1, row.title);
        }
        out
    }

    fn row_mut(&mut self, id: &ItemId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| &row.id == id)
    }
}

impl ListView for TextListView {
    fn render_all(&mut self, items: &[Item]) {
        self.rows = items
            .iter()
            .map(|item| Row {
                id: item.id.clone(),
                title: item.value.clone(),
            })
            .collect();
    }

    fn render_created(&mut self, item: &Item) {
        self.rows.push(Row {
            id: item.id.clone(),
            title: item.value.clone(),
        });
    }

    fn render_updated(&mut self, item: &Item) {
        match self.row_mut(&item.id) {
            Some(row) => row.title = item.value.clone(),
            None => warn!("event=render_updated module=view status=missing_row"),
        }
    }

    fn render_removed(&mut self, id: &ItemId) {
        self.rows.retain(|row| &row.id != id);
    }

    fn set_container_visibility(&mut self, has_items: bool) {
        self.container_visible = has_items;
    }
}

#[cfg(test)]
mod tests {
    use super::{RowAction, TextListView};
    use crate::model::item::{Item, ItemId};
    use crate::view::{ListView, RowTrigger};

    fn sample_view() -> TextListView {
        let mut view = TextListView::new();
        view.render_all(&[Item::with_id("a", "bread"), Item::with_id("b", "eggs")]);
        view.set_container_visibility(true);
        view
    }

    #[test]
    fn triggers_carry_row_id() {
        let view = sample_view();
        assert_eq!(
            view.trigger(2, RowAction::Edit),
            Some(RowTrigger::EditRequest(ItemId::from("b")))
        );
        assert_eq!(
            view.trigger(1, RowAction::Delete),
            Some(RowTrigger::DeleteRequest(ItemId::from("a")))
        );
        assert_eq!(view.trigger(0, RowAction::Edit), None);
        assert_eq!(view.trigger(3, RowAction::Edit), None);
    }

    #[test]
    fn update_and_remove_target_rows_by_id() {
        let mut view = sample_view();
        view.render_updated(&Item::with_id("b", "duck eggs"));
        view.render_removed(&ItemId::from("a"));

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].title, "duck eggs");
        assert_eq!(view.render(), "  1. duck eggs\n");
    }

    #[test]
    fn hidden_container_renders_nothing() {
        let mut view = sample_view();
        view.set_container_visibility(false);
        assert!(view.render().is_empty());
    }
}
