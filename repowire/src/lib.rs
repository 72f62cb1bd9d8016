//! # repowire - Composition Layer for a Content-Repository Host
//!
//! `repowire` wires a content-repository framework's optional subsystems into
//! a host application through two small mechanisms:
//!
//! - a **provider registry** that resolves, for each capability slot, exactly
//!   one externally built provider (with deferred defaults and last-write-wins
//!   overrides), and
//! - a **pipeline assembler** that emits the fixed-order request-handling
//!   chain with caller-supplied before/after hooks around each stage.
//!
//! Both are configuration-time builders; their results are immutable
//! snapshots shared freely across request tasks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use repowire::prelude::*;
//! use repowire::presets;
//!
//! // Resolve capabilities: preset defaults, then host overrides.
//! let mut registry = presets::in_memory(&settings)?;
//! registry.register(CapabilitySlot::SearchEngine, Arc::new(my_engine))?;
//! let providers = registry.resolve()?;
//!
//! // Assemble the chain with the host's stage handlers and hooks.
//! let pipeline = PipelineAssembler::new()
//!     .with_handler(Stage::Cors, cors)
//!     // ... one handler per stage ...
//!     .with_hook(Stage::Authentication, HookTiming::After, audit)?
//!     .assemble()?;
//!
//! // Per request:
//! match pipeline.dispatch(&mut request).await? {
//!     Traversal::Consumed(stage) => { /* stage produced the response */ }
//!     Traversal::FellThrough => { /* host's default (e.g. not-found) */ }
//! }
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use repowire_core::{
    // Errors
    AssemblyError,
    BoxError,
    // Capability resolution
    CapabilitySlot,
    ComposeError,
    // Stage traits
    DynStageHandler,
    DynStageHook,
    HookTiming,
    Provider,
    RegistryError,
    // Request
    Request,
    // Stages
    Stage,
    StageHandler,
    StageHook,
    StageOutcome,
};

pub use repowire_std::{
    assembler::PipelineAssembler,
    pipeline::{AssembledPipeline, PlannedStep, StepKind, Traversal},
    registry::{ProviderFactory, ProviderRegistry, ResolvedProviders},
    settings::CompositionSettings,
};

/// Composition presets for common deployment flavors.
pub mod presets {
    pub use repowire_std::presets::{in_memory, sql_local_index, sql_search_service};
}

/// Built-in default providers.
pub mod providers {
    #![allow(clippy::wildcard_imports)]
    pub use repowire_std::providers::*;
}

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use repowire_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use repowire_std::testing::*;
}

/// Prelude module - common imports for repowire.
///
/// # Usage
///
/// ```rust,ignore
/// use repowire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        AssemblyError,
        BoxError,
        // Capability resolution
        CapabilitySlot,
        ComposeError,
        CompositionSettings,
        HookTiming,
        // Pipeline
        PipelineAssembler,
        Provider,
        ProviderRegistry,
        RegistryError,
        Request,
        ResolvedProviders,
        Stage,
        // Core traits
        StageHandler,
        StageHook,
        StageOutcome,
        Traversal,
    };
}
