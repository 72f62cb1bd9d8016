//! Capability slots a composed repository may fulfil.

use std::fmt;

/// A named optional role that a composed repository fulfils with exactly one
/// provider.
///
/// Slots are the keys of the provider registry. A slot holds at most one
/// resolved provider; explicit registrations always win over preset-installed
/// defaults, and a mandatory slot with neither fails at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilitySlot {
    /// Full-text search and indexing engine.
    SearchEngine,
    /// Persistent store for security entities (identities, ACLs).
    SecurityDataProvider,
    /// Inter-node messaging channel for security-state changes.
    SecurityMessageProvider,
    /// Exclusive-lock provider for cluster-wide critical sections.
    LockProvider,
    /// Usage/statistics data collector.
    StatisticsProvider,
    /// Store for registered API clients and their secrets.
    ClientStoreProvider,
    /// Outgoing webhook dispatcher.
    WebhookProvider,
}

impl CapabilitySlot {
    /// All slots, in a fixed documentation/reporting order.
    pub const ALL: [CapabilitySlot; 7] = [
        CapabilitySlot::SearchEngine,
        CapabilitySlot::SecurityDataProvider,
        CapabilitySlot::SecurityMessageProvider,
        CapabilitySlot::LockProvider,
        CapabilitySlot::StatisticsProvider,
        CapabilitySlot::ClientStoreProvider,
        CapabilitySlot::WebhookProvider,
    ];

    /// Stable textual name of the slot.
    pub fn as_str(self) -> &'static str {
        match self {
            CapabilitySlot::SearchEngine => "SearchEngine",
            CapabilitySlot::SecurityDataProvider => "SecurityDataProvider",
            CapabilitySlot::SecurityMessageProvider => "SecurityMessageProvider",
            CapabilitySlot::LockProvider => "LockProvider",
            CapabilitySlot::StatisticsProvider => "StatisticsProvider",
            CapabilitySlot::ClientStoreProvider => "ClientStoreProvider",
            CapabilitySlot::WebhookProvider => "WebhookProvider",
        }
    }
}

impl fmt::Display for CapabilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
