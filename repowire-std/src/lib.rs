//! # repowire-std
//!
//! Standard implementations for the repowire composition layer.
//!
//! This crate provides:
//! - **Capability resolution**: [`registry::ProviderRegistry`] and its frozen
//!   snapshot [`registry::ResolvedProviders`]
//! - **Pipeline assembly**: [`assembler::PipelineAssembler`] and the immutable
//!   [`pipeline::AssembledPipeline`]
//! - **Composition presets**: the deployment flavors in [`presets`]
//! - **Built-in default providers**: [`providers`]
//! - **Standard hooks**: Logging, Timeout
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use repowire_core;

// Modules
pub mod assembler;
pub mod hooks;
pub mod pipeline;
pub mod presets;
pub mod providers;
pub mod registry;
pub mod settings;
pub mod testing;
