//! Composition presets for common deployment flavors.
//!
//! Each preset builds a [`ProviderRegistry`] with deferred defaults and
//! requirements for one deployment flavor, then hands the registry back so
//! the host can override individual slots before calling
//! [`resolve`](ProviderRegistry::resolve). Because defaults are deferred,
//! an override registered after the preset ran still wins.
//!
//! Presets only *select* providers from settings; they implement none of the
//! subsystems those providers front.
//!
//! A preset that cannot build a default because a setting is missing simply
//! installs nothing for that slot. The gap then surfaces at resolution as an
//! unresolved-capability failure if the slot is mandatory — one loud startup
//! error instead of a half-configured deployment.

use crate::{
    providers::{
        BrokerSecurityMessenger, InMemoryClientStore, InMemoryLockProvider, InMemorySearchEngine,
        InMemorySecurityStore, LocalIndexSearchEngine, LocalSecurityMessenger,
        NullStatisticsCollector, SearchServiceClient, SqlLockProvider, SqlSecurityStore,
        WebhookDispatcher,
    },
    registry::ProviderRegistry,
    settings::CompositionSettings,
};
use repowire_core::{CapabilitySlot, RegistryError};
use std::sync::Arc;

/// Single-node, in-process deployment; every capability defaults to an
/// in-memory provider. Intended for development and tests.
pub fn in_memory(_settings: &CompositionSettings) -> Result<ProviderRegistry, RegistryError> {
    let mut registry = ProviderRegistry::new();

    registry.require(CapabilitySlot::SearchEngine)?;
    registry.require(CapabilitySlot::SecurityDataProvider)?;
    registry.require(CapabilitySlot::SecurityMessageProvider)?;
    registry.require(CapabilitySlot::LockProvider)?;

    registry.register_default(CapabilitySlot::SearchEngine, || {
        Arc::new(InMemorySearchEngine::new())
    })?;
    registry.register_default(CapabilitySlot::SecurityDataProvider, || {
        Arc::new(InMemorySecurityStore::new())
    })?;
    registry.register_default(CapabilitySlot::SecurityMessageProvider, || {
        Arc::new(LocalSecurityMessenger::new())
    })?;
    registry.register_default(CapabilitySlot::LockProvider, || {
        Arc::new(InMemoryLockProvider::new())
    })?;
    registry.register_default(CapabilitySlot::ClientStoreProvider, || {
        Arc::new(InMemoryClientStore::new())
    })?;
    registry.register_default(CapabilitySlot::StatisticsProvider, || {
        Arc::new(NullStatisticsCollector::new())
    })?;
    registry.register_default(CapabilitySlot::WebhookProvider, || {
        Arc::new(WebhookDispatcher::new())
    })?;

    Ok(registry)
}

/// SQL-backed deployment with a node-local search index.
pub fn sql_local_index(settings: &CompositionSettings) -> Result<ProviderRegistry, RegistryError> {
    let mut registry = ProviderRegistry::new();

    registry.require(CapabilitySlot::SearchEngine)?;
    registry.require(CapabilitySlot::SecurityDataProvider)?;
    registry.require(CapabilitySlot::LockProvider)?;

    if let Some(dir) = settings.index_directory() {
        let dir = dir.to_owned();
        registry.register_default(CapabilitySlot::SearchEngine, move || {
            Arc::new(LocalIndexSearchEngine::new(dir))
        })?;
    }
    if let Some(conn) = settings.security_connection() {
        let conn = conn.to_owned();
        registry.register_default(CapabilitySlot::SecurityDataProvider, move || {
            Arc::new(SqlSecurityStore::new(conn))
        })?;
    }
    if let Some(conn) = settings.connection() {
        let conn = conn.to_owned();
        registry.register_default(CapabilitySlot::LockProvider, move || {
            Arc::new(SqlLockProvider::new(conn))
        })?;
    }
    registry.register_default(CapabilitySlot::WebhookProvider, || {
        Arc::new(WebhookDispatcher::new())
    })?;

    Ok(registry)
}

/// SQL-backed deployment with a remote search service and a message broker
/// carrying security events between nodes.
pub fn sql_search_service(
    settings: &CompositionSettings,
) -> Result<ProviderRegistry, RegistryError> {
    let mut registry = ProviderRegistry::new();

    registry.require(CapabilitySlot::SearchEngine)?;
    registry.require(CapabilitySlot::SecurityDataProvider)?;
    registry.require(CapabilitySlot::SecurityMessageProvider)?;
    registry.require(CapabilitySlot::LockProvider)?;

    if let Some(endpoint) = settings.search_endpoint() {
        let endpoint = endpoint.to_owned();
        registry.register_default(CapabilitySlot::SearchEngine, move || {
            Arc::new(SearchServiceClient::new(endpoint))
        })?;
    }
    if let Some(conn) = settings.security_connection() {
        let conn = conn.to_owned();
        registry.register_default(CapabilitySlot::SecurityDataProvider, move || {
            Arc::new(SqlSecurityStore::new(conn))
        })?;
    }
    registry.register_default(CapabilitySlot::SecurityMessageProvider, || {
        Arc::new(BrokerSecurityMessenger::new())
    })?;
    if let Some(conn) = settings.connection() {
        let conn = conn.to_owned();
        registry.register_default(CapabilitySlot::LockProvider, move || {
            Arc::new(SqlLockProvider::new(conn))
        })?;
    }
    registry.register_default(CapabilitySlot::WebhookProvider, || {
        Arc::new(WebhookDispatcher::new())
    })?;

    Ok(registry)
}
