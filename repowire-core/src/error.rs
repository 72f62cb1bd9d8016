//! Error types for repowire.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ComposeError`] - Top-level error type for all composition operations
//! - [`RegistryError`] - Errors during capability resolution
//! - [`AssemblyError`] - Errors during pipeline assembly
//!
//! All of these are configuration-time errors: they surface before any
//! request traffic and must abort startup. Per-request traversal has no error
//! type of its own; handler and hook failures propagate as [`BoxError`] to the
//! host's error boundary, and an unconsumed traversal ends in the
//! `FellThrough` *outcome*, which is not an error.

use crate::{
    slot::CapabilitySlot,
    stage::{HookTiming, Stage},
};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all composition operations.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// An error occurred while resolving capability providers.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An error occurred while assembling the pipeline.
    #[error("assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while resolving capability providers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// A mandatory slot has neither an explicit registration nor a default.
    #[error("no provider registered or defaulted for mandatory capability slot {0}")]
    UnresolvedCapability(CapabilitySlot),

    /// The registry was used after `resolve()` froze it.
    #[error("provider registry is frozen; registration after resolve is not allowed")]
    Frozen,

    /// A provider was registered under a slot it is not compatible with.
    #[error("provider for slot {provided} cannot be registered under slot {slot}")]
    CapabilityMismatch {
        /// The slot the caller tried to fill.
        slot: CapabilitySlot,
        /// The slot the provider actually fulfils.
        provided: CapabilitySlot,
    },
}

/// Errors that can occur while assembling the pipeline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    /// A hook was requested at a position its stage cannot accept.
    #[error("{timing} hook cannot be placed on {stage}: terminating stages accept before hooks only")]
    InvalidHookPlacement {
        /// The stage the hook was requested on.
        stage: Stage,
        /// The requested timing.
        timing: HookTiming,
    },

    /// A stage in the emitted chain has no core handler bound.
    #[error("no core handler bound for stage {0}")]
    MissingStageHandler(Stage),
}

// Convenience conversion
impl From<BoxError> for ComposeError {
    fn from(err: BoxError) -> Self {
        ComposeError::Custom(err)
    }
}
