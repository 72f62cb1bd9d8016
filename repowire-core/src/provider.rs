//! Provider trait for externally built capability implementations.

use crate::slot::CapabilitySlot;

/// An opaque, externally implemented handle satisfying one capability slot.
///
/// This layer never inspects a provider beyond the two accessors below: which
/// slot it is structurally compatible with, and a diagnostic name. The actual
/// search/security/locking behavior lives entirely in the external subsystem
/// the handle fronts.
///
/// Providers are registered once during composition and then shared read-only
/// across the process, so implementations must be `Send + Sync`.
pub trait Provider: Send + Sync + 'static {
    /// The capability slot this provider fulfils.
    fn slot(&self) -> CapabilitySlot;

    /// Diagnostic name of the concrete provider (e.g. for startup logs).
    fn name(&self) -> &str;
}
