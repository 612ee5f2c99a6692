use listkeep_core::{
    InteractionMode, InteractionState, ItemRegistry, ItemSnapshotStore, MemoryDurableStore,
    SubmitError, SubmitOutcome,
};

fn memory_registry() -> ItemRegistry<MemoryDurableStore> {
    ItemRegistry::new(ItemSnapshotStore::new(MemoryDurableStore::new()))
}

#[test]
fn empty_submit_in_create_mode_changes_nothing() {
    let mut registry = memory_registry();
    let mut state = InteractionState::new();

    let err = state.submit(&mut registry, "").unwrap_err();

    assert!(matches!(err, SubmitError::EmptyValue));
    assert!(registry.is_empty());
    assert_eq!(state.mode(), &InteractionMode::Create);
    assert_eq!(registry.store().backend().write_count(), 0);
}

#[test]
fn empty_submit_in_edit_mode_keeps_edit_target() {
    let mut registry = memory_registry();
    let item = registry.create("milk").unwrap();
    let mut state = InteractionState::new();
    state.request_edit(&registry, &item.id);

    let err = state.submit(&mut registry, "  ").unwrap_err();

    assert!(matches!(err, SubmitError::EmptyValue));
    assert_eq!(state.target(), Some(&item.id));
    assert_eq!(registry.get(&item.id).unwrap().value, "milk");
}

#[test]
fn submit_in_create_mode_creates_item() {
    let mut registry = memory_registry();
    let mut state = InteractionState::new();

    let outcome = state.submit(&mut registry, "bread").unwrap();

    let SubmitOutcome::Created(item) = outcome else {
        panic!("expected a created item");
    };
    assert_eq!(item.value, "bread");
    assert_eq!(registry.items(), &[item][..]);
    assert_eq!(state.mode(), &InteractionMode::Create);
}

#[test]
fn edit_then_submit_updates_only_target_and_returns_to_create() {
    let mut registry = memory_registry();
    let milk = registry.create("milk").unwrap();
    let bread = registry.create("bread").unwrap();
    let mut state = InteractionState::new();

    assert!(state.request_edit(&registry, &milk.id).is_some());
    assert_eq!(state.working_value(), "milk");
    let outcome = state.submit(&mut registry, "eggs").unwrap();

    assert!(matches!(outcome, SubmitOutcome::Updated(ref item) if item.id == milk.id));
    assert_eq!(registry.get(&milk.id).unwrap().value, "eggs");
    assert_eq!(registry.get(&bread.id).unwrap().value, "bread");
    assert_eq!(registry.len(), 2);
    assert_eq!(state.mode(), &InteractionMode::Create);
    assert_eq!(state.working_value(), "");
}

#[test]
fn edit_target_deleted_elsewhere_falls_back_to_create() {
    let mut registry = memory_registry();
    let milk = registry.create("milk").unwrap();
    let mut state = InteractionState::new();
    state.request_edit(&registry, &milk.id);

    registry.delete(&milk.id).unwrap();
    let err = state.submit(&mut registry, "eggs").unwrap_err();

    assert!(matches!(err, SubmitError::NotFound(ref id) if id == &milk.id));
    assert!(registry.is_empty());
    assert_eq!(state.mode(), &InteractionMode::Create);
}

#[test]
fn request_edit_switches_target_between_items() {
    let mut registry = memory_registry();
    let milk = registry.create("milk").unwrap();
    let bread = registry.create("bread").unwrap();
    let mut state = InteractionState::new();

    state.request_edit(&registry, &milk.id);
    state.request_edit(&registry, &bread.id);

    assert_eq!(
        state.mode(),
        &InteractionMode::Edit {
            target: bread.id.clone()
        }
    );
    assert_eq!(state.working_value(), "bread");
}
