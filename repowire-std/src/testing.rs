//! Testing utilities for repowire.
//!
//! This module provides fixtures to make testing compositions easier:
//!
//! - [`NamedProvider`]: a provider stub for any capability slot
//! - [`CountingHook`]: a hook that counts invocations
//! - [`RecordingHook`]: a hook that appends a label to a shared call log
//! - [`StubHandler`]: a stage handler with a fixed outcome that also records
//! - [`FailingHandler`]: a stage handler that always errors

use repowire_core::{
    BoxError, CapabilitySlot, Provider, Request, StageHandler, StageHook, StageOutcome,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A shared, ordered log of step labels, for asserting traversal order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Create an empty [`CallLog`].
pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// Named Provider
// ============================================================================

/// A provider stub carrying just a slot and a name.
///
/// # Example
///
/// ```rust,ignore
/// registry.register(
///     CapabilitySlot::SearchEngine,
///     Arc::new(NamedProvider::new(CapabilitySlot::SearchEngine, "engine-a")),
/// )?;
/// ```
#[derive(Debug, Clone)]
pub struct NamedProvider {
    slot: CapabilitySlot,
    name: String,
}

impl NamedProvider {
    /// Create a stub provider for the given slot.
    pub fn new(slot: CapabilitySlot, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
        }
    }
}

impl Provider for NamedProvider {
    fn slot(&self) -> CapabilitySlot {
        self.slot
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Counting Hook
// ============================================================================

/// A hook that counts invocations.
///
/// Clones share the counter, so keep one clone outside the pipeline to read
/// the count after dispatching.
pub struct CountingHook {
    count: Arc<AtomicUsize>,
}

impl CountingHook {
    /// Create a new counting hook.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for CountingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHook {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<R: Request> StageHook<R> for CountingHook {
    async fn run(&self, _request: &mut R) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that appends its label to a shared [`CallLog`].
pub struct RecordingHook {
    label: String,
    log: CallLog,
}

impl RecordingHook {
    /// Create a recording hook writing `label` into `log`.
    pub fn new(label: impl Into<String>, log: CallLog) -> Self {
        Self {
            label: label.into(),
            log,
        }
    }
}

impl<R: Request> StageHook<R> for RecordingHook {
    async fn run(&self, _request: &mut R) -> Result<(), BoxError> {
        self.log.lock().unwrap().push(self.label.clone());
        Ok(())
    }
}

// ============================================================================
// Stub Handler
// ============================================================================

/// A stage handler that records its label and returns a fixed outcome.
pub struct StubHandler {
    label: String,
    log: CallLog,
    outcome: StageOutcome,
}

impl StubHandler {
    /// Create a handler that records `label` and declines every request.
    pub fn declining(label: impl Into<String>, log: CallLog) -> Self {
        Self {
            label: label.into(),
            log,
            outcome: StageOutcome::Declined,
        }
    }

    /// Create a handler that records `label` and consumes every request.
    pub fn consuming(label: impl Into<String>, log: CallLog) -> Self {
        Self {
            label: label.into(),
            log,
            outcome: StageOutcome::Consumed,
        }
    }
}

impl<R: Request> StageHandler<R> for StubHandler {
    async fn handle(&self, _request: &mut R) -> Result<StageOutcome, BoxError> {
        self.log.lock().unwrap().push(self.label.clone());
        Ok(self.outcome)
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A stage handler that always fails with the given message.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a failing handler.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<R: Request> StageHandler<R> for FailingHandler {
    async fn handle(&self, _request: &mut R) -> Result<StageOutcome, BoxError> {
        Err(self.message.clone().into())
    }
}
