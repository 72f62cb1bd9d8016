//! # repowire-core
//!
//! Core traits and types for the repowire composition layer.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! provider packages and host integrations that don't need the full
//! `repowire-std` implementation.
//!
//! # Two Mechanisms
//!
//! repowire wires a content-repository framework's optional subsystems into a
//! host application through two small, reusable mechanisms. This crate holds
//! the vocabulary both of them share:
//!
//! ## Capability Slots ([`CapabilitySlot`], [`Provider`])
//!
//! A slot is a named optional role (search engine, security data store,
//! exclusive-lock provider, ...) that a composed repository may fulfil with
//! exactly one externally built [`Provider`]. Providers are opaque here: this
//! layer never looks inside them, it only resolves which one fills which slot.
//!
//! ## Stages ([`Stage`], [`StageHandler`], [`StageHook`])
//!
//! A stage is a fixed position in the request-handling chain with an
//! associated core handler. The stage order is not reconfigurable; what varies
//! is which caller-supplied [`StageHook`]s surround each stage, and whether a
//! branching (terminating) stage consumes a given request. Terminating stages
//! fork request handling: nothing host-configured runs after them on that
//! request's path.
//!
//! # Error Types
//!
//! - [`ComposeError`] - Top-level error type
//! - [`RegistryError`] - Capability-resolution errors
//! - [`AssemblyError`] - Pipeline-assembly errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod hook;
mod provider;
mod request;
mod slot;
mod stage;

// Re-exports
pub use error::{AssemblyError, BoxError, ComposeError, RegistryError};
pub use handler::{DynStageHandler, StageHandler, StageOutcome};
pub use hook::{DynStageHook, StageHook};
pub use provider::Provider;
pub use request::Request;
pub use slot::CapabilitySlot;
pub use stage::{HookTiming, Stage};
