//! List session: the event surface consumed by front ends.
//!
//! # Responsibility
//! - Own one registry, one interaction state, one view and one notifier.
//! - Dispatch `on_load`, `on_submit`, `on_edit_request`, `on_delete_request`
//!   and `on_clear_all` to the right collaborators in order.
//!
//! # Invariants
//! - After every handler, the view mirrors the registry and the container
//!   is visible iff the registry is non-empty.
//! - Handlers never panic; failures become a danger notice plus a reset to
//!   `Create` mode.

use crate::interaction::machine::{InteractionState, SubmitError, SubmitOutcome};
use crate::model::item::{Item, ItemId};
use crate::notify::{Notifier, Severity};
use crate::registry::item_registry::ItemRegistry;
use crate::store::DurableStore;
use crate::view::{ListView, RowTrigger};
use log::{error, info};

pub const MSG_ITEM_ADDED: &str = "item added to the list";
pub const MSG_VALUE_CHANGED: &str = "value changed";
pub const MSG_EMPTY_VALUE: &str = "empty value";
pub const MSG_ITEM_REMOVED: &str = "item has been removed";
pub const MSG_LIST_CLEARED: &str = "You've deleted all items";
pub const MSG_ITEM_MISSING: &str = "item no longer exists";
pub const MSG_SAVE_FAILED: &str = "could not save the list";
pub const MSG_LOAD_FAILED: &str = "could not load the saved list";

/// What a handler did, for front ends that need more than the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Loaded { item_count: usize },
    Created(Item),
    Updated(Item),
    EditStarted(Item),
    EditIgnored(ItemId),
    Deleted { id: ItemId, removed: bool },
    Cleared,
    Rejected(&'static str),
}

/// One list-management session.
pub struct ListSession<S, V, N>
where
    S: DurableStore,
    V: ListView,
    N: Notifier,
{
    registry: ItemRegistry<S>,
    interaction: InteractionState,
    view: V,
    notifier: N,
}

impl<S, V, N> ListSession<S, V, N>
where
    S: DurableStore,
    V: ListView,
    N: Notifier,
{
    pub fn new(registry: ItemRegistry<S>, view: V, notifier: N) -> Self {
        Self {
            registry,
            interaction: InteractionState::new(),
            view,
            notifier,
        }
    }

    /// Startup: rehydrates the registry and draws the full list.
    pub fn on_load(&mut self) -> SessionEvent {
        if let Err(err) = self.registry.load_all() {
            error!("event=session_load module=service status=error error={err}");
            self.notifier.notify(MSG_LOAD_FAILED, Severity::Danger);
        }

        self.view.render_all(self.registry.items());
        self.sync_visibility();
        info!(
            "event=session_load module=service status=ok item_count={}",
            self.registry.len()
        );
        SessionEvent::Loaded {
            item_count: self.registry.len(),
        }
    }

    /// Form submission in whatever mode is active.
    pub fn on_submit(&mut self, value: &str) -> SessionEvent {
        match self.interaction.submit(&mut self.registry, value) {
            Ok(SubmitOutcome::Created(item)) => {
                self.view.render_created(&item);
                self.sync_visibility();
                self.notifier.notify(MSG_ITEM_ADDED, Severity::Success);
                SessionEvent::Created(item)
            }
            Ok(SubmitOutcome::Updated(item)) => {
                self.view.render_updated(&item);
                self.notifier.notify(MSG_VALUE_CHANGED, Severity::Success);
                SessionEvent::Updated(item)
            }
            Err(SubmitError::EmptyValue) => self.reject(MSG_EMPTY_VALUE),
            Err(SubmitError::NotFound(id)) => {
                self.view.render_removed(&id);
                self.sync_visibility();
                self.reject(MSG_ITEM_MISSING)
            }
            Err(SubmitError::Registry(err)) => {
                error!("event=session_submit module=service status=error error={err}");
                self.reject(MSG_SAVE_FAILED)
            }
        }
    }

    /// Row edit control. Stale ids are ignored silently.
    pub fn on_edit_request(&mut self, id: &ItemId) -> SessionEvent {
        match self.interaction.request_edit(&self.registry, id) {
            Some(item) => SessionEvent::EditStarted(item.clone()),
            None => SessionEvent::EditIgnored(id.clone()),
        }
    }

    /// Row delete control. Deleting an absent id still succeeds but shows
    /// no notice.
    pub fn on_delete_request(&mut self, id: &ItemId) -> SessionEvent {
        self.interaction.cancel_to_default();
        match self.registry.delete(id) {
            Ok(removed) => {
                self.view.render_removed(id);
                self.sync_visibility();
                if removed.is_some() {
                    self.notifier.notify(MSG_ITEM_REMOVED, Severity::Danger);
                }
                SessionEvent::Deleted {
                    id: id.clone(),
                    removed: removed.is_some(),
                }
            }
            Err(err) => {
                error!("event=session_delete module=service status=error error={err}");
                self.reject(MSG_SAVE_FAILED)
            }
        }
    }

    /// Bulk clear.
    pub fn on_clear_all(&mut self) -> SessionEvent {
        self.interaction.cancel_to_default();
        match self.registry.clear_all() {
            Ok(()) => {
                self.view.render_all(&[]);
                self.sync_visibility();
                self.notifier.notify(MSG_LIST_CLEARED, Severity::Danger);
                SessionEvent::Cleared
            }
            Err(err) => {
                error!("event=session_clear module=service status=error error={err}");
                self.reject(MSG_SAVE_FAILED)
            }
        }
    }

    /// Dispatches a row control to its handler.
    pub fn on_row_trigger(&mut self, trigger: RowTrigger) -> SessionEvent {
        match trigger {
            RowTrigger::EditRequest(id) => self.on_edit_request(&id),
            RowTrigger::DeleteRequest(id) => self.on_delete_request(&id),
        }
    }

    pub fn registry(&self) -> &ItemRegistry<S> {
        &self.registry
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Mutable access for front ends that edit the working value in place.
    pub fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Direct registry access that bypasses the view and the notifier.
    pub fn registry_mut(&mut self) -> &mut ItemRegistry<S> {
        &mut self.registry
    }

    fn sync_visibility(&mut self) {
        self.view.set_container_visibility(!self.registry.is_empty());
    }

    fn reject(&mut self, message: &'static str) -> SessionEvent {
        self.notifier.notify(message, Severity::Danger);
        SessionEvent::Rejected(message)
    }
}
