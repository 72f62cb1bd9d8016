//! Provider registry for capability resolution.
//!
//! This module provides a builder-phase [`ProviderRegistry`] and its frozen,
//! thread-safe result [`ResolvedProviders`].
//!
//! Registration is configuration-time and single-threaded by contract: it runs
//! once during process startup, before any request traffic, so the registry
//! takes `&mut self` and does no internal locking. After [`resolve`]
//! the snapshot is immutable and safely shared across tasks.
//!
//! The one subtlety worth calling out: defaults installed via
//! [`register_default`] are *deferred*. Composition presets install defaults
//! first and hand the registry back so the caller can override individual
//! slots afterwards, so a default must not shadow an explicit registration no
//! matter which call came first. Defaults are therefore applied only at
//! [`resolve`] time, and only for slots with no explicit registration.
//!
//! [`resolve`]: ProviderRegistry::resolve
//! [`register_default`]: ProviderRegistry::register_default

use repowire_core::{CapabilitySlot, Provider, RegistryError};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

/// Deferred constructor for a default provider.
///
/// Factories run lazily at [`ProviderRegistry::resolve`] time, and only for
/// slots with no explicit registration, so unused defaults are never built.
pub type ProviderFactory = Box<dyn FnOnce() -> Arc<dyn Provider> + Send>;

/// Accumulates capability providers during composition.
///
/// For each [`CapabilitySlot`] the registry resolves exactly one provider:
/// the last explicit [`register`] call if any, else the slot's deferred
/// default, else a resolution failure when the slot is mandatory.
///
/// # Example
/// ```ignore
/// let mut registry = ProviderRegistry::new();
/// registry.require(CapabilitySlot::SearchEngine)?;
/// registry.register_default(CapabilitySlot::SearchEngine, || {
///     Arc::new(InMemorySearchEngine::new())
/// })?;
/// registry.register(CapabilitySlot::SearchEngine, Arc::new(my_engine))?;
/// let providers = registry.resolve()?; // my_engine wins over the default
/// ```
///
/// [`register`]: ProviderRegistry::register
#[derive(Default)]
pub struct ProviderRegistry {
    explicit: HashMap<CapabilitySlot, Arc<dyn Provider>>,
    defaults: HashMap<CapabilitySlot, ProviderFactory>,
    required: HashSet<CapabilitySlot>,
    frozen: bool,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for a slot.
    ///
    /// Last write wins: overwriting an earlier registration (or shadowing a
    /// default installed by a preset) is allowed and silent. The only
    /// structural conflict is a provider whose own capability does not match
    /// the slot it is registered under.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Frozen`] after [`resolve`](Self::resolve);
    /// [`RegistryError::CapabilityMismatch`] when `provider.slot() != slot`.
    pub fn register(
        &mut self,
        slot: CapabilitySlot,
        provider: Arc<dyn Provider>,
    ) -> Result<(), RegistryError> {
        if self.frozen {
            return Err(RegistryError::Frozen);
        }
        if provider.slot() != slot {
            return Err(RegistryError::CapabilityMismatch {
                slot,
                provided: provider.slot(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(%slot, provider = provider.name(), "registered provider");
        self.explicit.insert(slot, provider);
        Ok(())
    }

    /// Install a deferred default for a slot.
    ///
    /// The factory runs at [`resolve`](Self::resolve) time only if the slot
    /// has no explicit registration by then, regardless of the relative order
    /// of `register_default` and [`register`](Self::register) calls. A later
    /// `register_default` for the same slot replaces the pending factory.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Frozen`] after [`resolve`](Self::resolve).
    pub fn register_default<F>(
        &mut self,
        slot: CapabilitySlot,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: FnOnce() -> Arc<dyn Provider> + Send + 'static,
    {
        if self.frozen {
            return Err(RegistryError::Frozen);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(%slot, "installed default provider factory");
        self.defaults.insert(slot, Box::new(factory));
        Ok(())
    }

    /// Mark a slot as mandatory.
    ///
    /// A slot becomes mandatory once a dependent feature is requested; the
    /// preset (or caller) enabling that feature calls `require`. Resolution
    /// fails if a mandatory slot ends up with neither an explicit
    /// registration nor a default.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Frozen`] after [`resolve`](Self::resolve).
    pub fn require(&mut self, slot: CapabilitySlot) -> Result<(), RegistryError> {
        if self.frozen {
            return Err(RegistryError::Frozen);
        }
        self.required.insert(slot);
        Ok(())
    }

    /// Whether [`resolve`](Self::resolve) has already frozen this registry.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Finalize the registry into an immutable provider snapshot.
    ///
    /// Applies pending defaults to slots with no explicit registration, then
    /// verifies every mandatory slot is filled. The registry freezes as a
    /// side effect — whether resolution succeeds or not — so any later
    /// registration is a programming error surfaced loudly.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Frozen`] on repeated calls;
    /// [`RegistryError::UnresolvedCapability`] naming the first mandatory
    /// slot (in [`CapabilitySlot::ALL`] order) that nothing fills;
    /// [`RegistryError::CapabilityMismatch`] when a default factory yields a
    /// provider for a different slot.
    pub fn resolve(&mut self) -> Result<ResolvedProviders, RegistryError> {
        if self.frozen {
            return Err(RegistryError::Frozen);
        }
        self.frozen = true;

        let mut providers = std::mem::take(&mut self.explicit);
        let mut defaults = std::mem::take(&mut self.defaults);
        let required = std::mem::take(&mut self.required);

        // Deferred default application: explicit registrations always win.
        for slot in CapabilitySlot::ALL {
            if providers.contains_key(&slot) {
                continue;
            }
            if let Some(factory) = defaults.remove(&slot) {
                let provider = factory();
                if provider.slot() != slot {
                    return Err(RegistryError::CapabilityMismatch {
                        slot,
                        provided: provider.slot(),
                    });
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(%slot, provider = provider.name(), "applied default provider");
                providers.insert(slot, provider);
            }
        }

        for slot in CapabilitySlot::ALL {
            if required.contains(&slot) && !providers.contains_key(&slot) {
                #[cfg(feature = "tracing")]
                tracing::error!(%slot, "mandatory capability slot left unresolved");
                return Err(RegistryError::UnresolvedCapability(slot));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(count = providers.len(), "capability resolution complete");
        Ok(ResolvedProviders { providers })
    }
}

/// An immutable, thread-safe mapping of capability slots to providers.
///
/// Created by [`ProviderRegistry::resolve`]. This is what gets handed to the
/// external repository builder; cloning is cheap (the providers are shared
/// via `Arc`).
#[derive(Clone)]
pub struct ResolvedProviders {
    providers: HashMap<CapabilitySlot, Arc<dyn Provider>>,
}

// The providers themselves are opaque, so debug output shows the resolved
// slot-to-name mapping only.
impl fmt::Debug for ResolvedProviders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_map();
        for (slot, provider) in self.iter() {
            entries.key(&slot).value(&provider.name());
        }
        entries.finish()
    }
}

impl ResolvedProviders {
    /// Get the provider resolved for a slot, if any.
    pub fn get(&self, slot: CapabilitySlot) -> Option<&Arc<dyn Provider>> {
        self.providers.get(&slot)
    }

    /// Whether a slot was resolved.
    pub fn contains(&self, slot: CapabilitySlot) -> bool {
        self.providers.contains_key(&slot)
    }

    /// Iterate over resolved slots in [`CapabilitySlot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (CapabilitySlot, &Arc<dyn Provider>)> {
        CapabilitySlot::ALL
            .into_iter()
            .filter_map(|slot| self.providers.get(&slot).map(|p| (slot, p)))
    }

    /// Number of resolved slots.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
