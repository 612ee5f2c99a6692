//! Create/edit state machine.
//!
//! Two states: `Create` (initial) and `Edit { target }`. The transition
//! function in `submit` is the only place that knows which registry call a
//! form submission maps to.

use crate::model::item::{is_blank, Item, ItemId};
use crate::registry::item_registry::{ItemRegistry, RegistryError};
use crate::store::DurableStore;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Latent form mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Create,
    Edit {
        target: ItemId,
    },
}

/// Successful submit result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Item),
    Updated(Item),
}

/// Submit failure after local recovery has been applied.
#[derive(Debug)]
pub enum SubmitError {
    /// Blank input; state is left untouched.
    EmptyValue,
    /// Edit target vanished before submit; state fell back to `Create`.
    NotFound(ItemId),
    /// Registry rejected the write; state fell back to `Create`.
    Registry(RegistryError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "empty value"),
            Self::NotFound(id) => write!(f, "edit target no longer exists: {id}"),
            Self::Registry(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegistryError> for SubmitError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::NotFound(id) => Self::NotFound(id),
            other => Self::Registry(other),
        }
    }
}

/// Mode plus the form's working value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    mode: InteractionMode,
    working_value: String,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    /// Item targeted by the pending edit, if any.
    pub fn target(&self) -> Option<&ItemId> {
        match &self.mode {
            InteractionMode::Create => None,
            InteractionMode::Edit { target } => Some(target),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, InteractionMode::Edit { .. })
    }

    /// Text currently held by the form.
    pub fn working_value(&self) -> &str {
        self.working_value.as_str()
    }

    pub fn set_working_value(&mut self, value: impl Into<String>) {
        self.working_value = value.into();
    }

    /// Label of the form's submit control for the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            InteractionMode::Create => "submit",
            InteractionMode::Edit { .. } => "edit",
        }
    }

    /// Switches to `Edit { id }` and primes the working value.
    ///
    /// Returns the targeted item. Stale ids are ignored: returns `None` and
    /// leaves the state unchanged.
    pub fn request_edit<'r, S: DurableStore>(
        &mut self,
        registry: &'r ItemRegistry<S>,
        id: &ItemId,
    ) -> Option<&'r Item> {
        let Some(item) = registry.get(id) else {
            debug!("event=edit_request module=interaction status=ignored reason=stale_id");
            return None;
        };

        self.working_value = item.value.clone();
        self.mode = InteractionMode::Edit {
            target: item.id.clone(),
        };
        debug!("event=edit_request module=interaction status=ok");
        Some(item)
    }

    /// Resolves a form submission against the current mode.
    pub fn submit<S: DurableStore>(
        &mut self,
        registry: &mut ItemRegistry<S>,
        value: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        if is_blank(value) {
            return Err(SubmitError::EmptyValue);
        }

        let result = match &self.mode {
            InteractionMode::Create => registry.create(value).map(SubmitOutcome::Created),
            InteractionMode::Edit { target } => {
                registry.update(target, value).map(SubmitOutcome::Updated)
            }
        };

        self.cancel_to_default();
        result.map_err(|err| {
            warn!("event=submit module=interaction status=fallback error={err}");
            SubmitError::from(err)
        })
    }

    /// Forces `Create` mode and clears the working value.
    pub fn cancel_to_default(&mut self) {
        self.mode = InteractionMode::Create;
        self.working_value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, InteractionState};
    use crate::model::item::ItemId;
    use crate::registry::item_registry::ItemRegistry;
    use crate::store::{ItemSnapshotStore, MemoryDurableStore};

    #[test]
    fn request_edit_primes_working_value_and_label() {
        let mut registry = ItemRegistry::new(ItemSnapshotStore::new(MemoryDurableStore::new()));
        let item = registry.create("milk").unwrap();
        let mut state = InteractionState::new();

        let primed = state.request_edit(&registry, &item.id);
        assert_eq!(primed, Some(&item));
        assert_eq!(state.working_value(), "milk");
        assert_eq!(state.submit_label(), "edit");
        assert_eq!(state.target(), Some(&item.id));
    }

    #[test]
    fn stale_edit_request_is_ignored() {
        let registry = ItemRegistry::new(ItemSnapshotStore::new(MemoryDurableStore::new()));
        let mut state = InteractionState::new();
        state.set_working_value("draft");

        assert!(state.request_edit(&registry, &ItemId::from("gone")).is_none());
        assert_eq!(state.mode(), &InteractionMode::Create);
        assert_eq!(state.working_value(), "draft");
    }

    #[test]
    fn cancel_to_default_resets_mode_and_value() {
        let mut registry = ItemRegistry::new(ItemSnapshotStore::new(MemoryDurableStore::new()));
        let item = registry.create("milk").unwrap();
        let mut state = InteractionState::new();
        state.request_edit(&registry, &item.id);

        state.cancel_to_default();

        assert_eq!(state, InteractionState::new());
        assert_eq!(state.submit_label(), "submit");
    }
}
