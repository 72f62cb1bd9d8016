use repowire::testing::NamedProvider;
use repowire::{CapabilitySlot, ProviderRegistry, RegistryError};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn provider(slot: CapabilitySlot, name: &str) -> Arc<NamedProvider> {
    Arc::new(NamedProvider::new(slot, name))
}

#[test]
fn default_applies_when_nothing_registered() {
    let mut registry = ProviderRegistry::new();
    registry
        .register_default(CapabilitySlot::SearchEngine, || {
            Arc::new(NamedProvider::new(
                CapabilitySlot::SearchEngine,
                "default-engine",
            ))
        })
        .unwrap();

    let providers = registry.resolve().unwrap();
    assert_eq!(
        providers.get(CapabilitySlot::SearchEngine).unwrap().name(),
        "default-engine"
    );
}

#[test]
fn explicit_registration_wins_regardless_of_order() {
    // Default installed first, override afterwards (the preset flow).
    let mut registry = ProviderRegistry::new();
    registry
        .register_default(CapabilitySlot::SearchEngine, || {
            Arc::new(NamedProvider::new(
                CapabilitySlot::SearchEngine,
                "default-engine",
            ))
        })
        .unwrap();
    registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "explicit-engine"),
        )
        .unwrap();
    let providers = registry.resolve().unwrap();
    assert_eq!(
        providers.get(CapabilitySlot::SearchEngine).unwrap().name(),
        "explicit-engine"
    );

    // Override first, default installed afterwards: still the explicit one.
    let mut registry = ProviderRegistry::new();
    registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "explicit-engine"),
        )
        .unwrap();
    registry
        .register_default(CapabilitySlot::SearchEngine, || {
            Arc::new(NamedProvider::new(
                CapabilitySlot::SearchEngine,
                "default-engine",
            ))
        })
        .unwrap();
    let providers = registry.resolve().unwrap();
    assert_eq!(
        providers.get(CapabilitySlot::SearchEngine).unwrap().name(),
        "explicit-engine"
    );
}

#[test]
fn shadowed_default_factory_is_never_built() {
    let built = Arc::new(AtomicBool::new(false));
    let built_flag = built.clone();

    let mut registry = ProviderRegistry::new();
    registry
        .register_default(CapabilitySlot::LockProvider, move || {
            built_flag.store(true, Ordering::SeqCst);
            Arc::new(NamedProvider::new(
                CapabilitySlot::LockProvider,
                "default-lock",
            ))
        })
        .unwrap();
    registry
        .register(
            CapabilitySlot::LockProvider,
            provider(CapabilitySlot::LockProvider, "explicit-lock"),
        )
        .unwrap();

    registry.resolve().unwrap();
    assert!(!built.load(Ordering::SeqCst));
}

#[test]
fn overwrite_is_allowed_and_last_write_wins() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "first"),
        )
        .unwrap();
    registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "second"),
        )
        .unwrap();

    let providers = registry.resolve().unwrap();
    assert_eq!(
        providers.get(CapabilitySlot::SearchEngine).unwrap().name(),
        "second"
    );
}

#[test]
fn mandatory_slot_without_provider_fails_naming_the_slot() {
    let mut registry = ProviderRegistry::new();
    registry.require(CapabilitySlot::LockProvider).unwrap();

    let err = registry.resolve().unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnresolvedCapability(CapabilitySlot::LockProvider)
    );
    assert!(err.to_string().contains("LockProvider"));
}

#[test]
fn end_to_end_partial_registration_fails_on_missing_lock_provider() {
    let mut registry = ProviderRegistry::new();
    registry.require(CapabilitySlot::SearchEngine).unwrap();
    registry
        .require(CapabilitySlot::SecurityDataProvider)
        .unwrap();
    registry.require(CapabilitySlot::LockProvider).unwrap();
    registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "engine-a"),
        )
        .unwrap();
    registry
        .register(
            CapabilitySlot::SecurityDataProvider,
            provider(CapabilitySlot::SecurityDataProvider, "store-b"),
        )
        .unwrap();

    let err = registry.resolve().unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnresolvedCapability(CapabilitySlot::LockProvider)
    );
}

#[test]
fn registry_is_frozen_after_resolve() {
    let mut registry = ProviderRegistry::new();
    registry.resolve().unwrap();
    assert!(registry.is_frozen());

    let err = registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "late"),
        )
        .unwrap_err();
    assert_eq!(err, RegistryError::Frozen);

    let err = registry
        .register_default(CapabilitySlot::SearchEngine, || {
            Arc::new(NamedProvider::new(CapabilitySlot::SearchEngine, "late"))
        })
        .unwrap_err();
    assert_eq!(err, RegistryError::Frozen);

    let err = registry.require(CapabilitySlot::SearchEngine).unwrap_err();
    assert_eq!(err, RegistryError::Frozen);

    let err = registry.resolve().unwrap_err();
    assert_eq!(err, RegistryError::Frozen);
}

#[test]
fn registry_freezes_even_when_resolution_fails() {
    let mut registry = ProviderRegistry::new();
    registry.require(CapabilitySlot::LockProvider).unwrap();
    registry.resolve().unwrap_err();

    let err = registry
        .register(
            CapabilitySlot::LockProvider,
            provider(CapabilitySlot::LockProvider, "too-late"),
        )
        .unwrap_err();
    assert_eq!(err, RegistryError::Frozen);
}

#[test]
fn registering_provider_under_wrong_slot_is_a_structural_conflict() {
    let mut registry = ProviderRegistry::new();
    let err = registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::LockProvider, "lock-pretending-to-search"),
        )
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::CapabilityMismatch {
            slot: CapabilitySlot::SearchEngine,
            provided: CapabilitySlot::LockProvider,
        }
    );
}

#[test]
fn resolved_snapshot_reports_slots_deterministically() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(
            CapabilitySlot::LockProvider,
            provider(CapabilitySlot::LockProvider, "lock"),
        )
        .unwrap();
    registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "engine"),
        )
        .unwrap();

    let providers = registry.resolve().unwrap();
    assert_eq!(providers.len(), 2);
    assert!(providers.contains(CapabilitySlot::SearchEngine));
    assert!(!providers.contains(CapabilitySlot::WebhookProvider));

    // Iteration follows CapabilitySlot::ALL order, not insertion order.
    let slots: Vec<_> = providers.iter().map(|(slot, _)| slot).collect();
    assert_eq!(
        slots,
        vec![CapabilitySlot::SearchEngine, CapabilitySlot::LockProvider]
    );
}

#[test]
fn resolved_snapshot_debug_output_names_providers() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(
            CapabilitySlot::SearchEngine,
            provider(CapabilitySlot::SearchEngine, "engine-a"),
        )
        .unwrap();

    let providers = registry.resolve().unwrap();
    let rendered = format!("{providers:?}");
    assert!(rendered.contains("SearchEngine"));
    assert!(rendered.contains("engine-a"));
}
