//! Built-in default providers.
//!
//! These are the named opaque handles presets install as deferred defaults.
//! They carry only the settings needed to reach the external subsystem they
//! front (a connection string, an endpoint, an index path); none of the
//! actual search/security/locking behavior lives in this layer.

use repowire_core::{CapabilitySlot, Provider};
use std::path::PathBuf;

// ============================================================================
// In-memory defaults
// ============================================================================

/// In-process search engine handle for single-node and test deployments.
#[derive(Debug, Default)]
pub struct InMemorySearchEngine;

impl InMemorySearchEngine {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for InMemorySearchEngine {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::SearchEngine
    }

    fn name(&self) -> &str {
        "in-memory-search-engine"
    }
}

/// In-process security data store handle.
#[derive(Debug, Default)]
pub struct InMemorySecurityStore;

impl InMemorySecurityStore {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for InMemorySecurityStore {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::SecurityDataProvider
    }

    fn name(&self) -> &str {
        "in-memory-security-store"
    }
}

/// In-process security message channel (no inter-node traffic).
#[derive(Debug, Default)]
pub struct LocalSecurityMessenger;

impl LocalSecurityMessenger {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for LocalSecurityMessenger {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::SecurityMessageProvider
    }

    fn name(&self) -> &str {
        "local-security-messenger"
    }
}

/// In-process exclusive-lock handle (single node only).
#[derive(Debug, Default)]
pub struct InMemoryLockProvider;

impl InMemoryLockProvider {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for InMemoryLockProvider {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::LockProvider
    }

    fn name(&self) -> &str {
        "in-memory-lock-provider"
    }
}

/// In-process API client store handle.
#[derive(Debug, Default)]
pub struct InMemoryClientStore;

impl InMemoryClientStore {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for InMemoryClientStore {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::ClientStoreProvider
    }

    fn name(&self) -> &str {
        "in-memory-client-store"
    }
}

/// Statistics collector that records nothing.
#[derive(Debug, Default)]
pub struct NullStatisticsCollector;

impl NullStatisticsCollector {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for NullStatisticsCollector {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::StatisticsProvider
    }

    fn name(&self) -> &str {
        "null-statistics-collector"
    }
}

/// Default webhook dispatcher handle.
#[derive(Debug, Default)]
pub struct WebhookDispatcher;

impl WebhookDispatcher {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for WebhookDispatcher {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::WebhookProvider
    }

    fn name(&self) -> &str {
        "webhook-dispatcher"
    }
}

// ============================================================================
// SQL-backed defaults
// ============================================================================

/// SQL-backed security data store handle.
#[derive(Debug)]
pub struct SqlSecurityStore {
    connection_string: String,
}

impl SqlSecurityStore {
    /// Create the handle for the given security database.
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    /// The connection string this store was configured with.
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Provider for SqlSecurityStore {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::SecurityDataProvider
    }

    fn name(&self) -> &str {
        "sql-security-store"
    }
}

/// SQL-backed exclusive-lock handle.
#[derive(Debug)]
pub struct SqlLockProvider {
    connection_string: String,
}

impl SqlLockProvider {
    /// Create the handle for the given database.
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    /// The connection string this provider was configured with.
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Provider for SqlLockProvider {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::LockProvider
    }

    fn name(&self) -> &str {
        "sql-lock-provider"
    }
}

// ============================================================================
// Search and messaging defaults for distributed deployments
// ============================================================================

/// Node-local search index handle.
#[derive(Debug)]
pub struct LocalIndexSearchEngine {
    index_directory: PathBuf,
}

impl LocalIndexSearchEngine {
    /// Create the handle over the given index directory.
    pub fn new(index_directory: impl Into<PathBuf>) -> Self {
        Self {
            index_directory: index_directory.into(),
        }
    }

    /// The index directory this engine was configured with.
    pub fn index_directory(&self) -> &PathBuf {
        &self.index_directory
    }
}

impl Provider for LocalIndexSearchEngine {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::SearchEngine
    }

    fn name(&self) -> &str {
        "local-index-search-engine"
    }
}

/// Remote search-service client handle.
#[derive(Debug)]
pub struct SearchServiceClient {
    endpoint: String,
}

impl SearchServiceClient {
    /// Create the handle for the given service endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client was configured with.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Provider for SearchServiceClient {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::SearchEngine
    }

    fn name(&self) -> &str {
        "search-service-client"
    }
}

/// Message-broker security message channel for multi-node deployments.
#[derive(Debug, Default)]
pub struct BrokerSecurityMessenger;

impl BrokerSecurityMessenger {
    /// Create the handle.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for BrokerSecurityMessenger {
    fn slot(&self) -> CapabilitySlot {
        CapabilitySlot::SecurityMessageProvider
    }

    fn name(&self) -> &str {
        "broker-security-messenger"
    }
}
