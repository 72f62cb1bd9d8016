//! Pipeline assembler.
//!
//! This module provides a builder-phase [`PipelineAssembler`] that binds a
//! core handler to each [`Stage`] and places caller-supplied hooks around
//! them, then emits an immutable
//! [`AssembledPipeline`](crate::pipeline::AssembledPipeline).
//!
//! Like provider registration, assembly is configuration-time and
//! single-threaded by contract: it runs once during startup, before any
//! request traffic, so the builder is a plain owned value with no internal
//! locking.
//!
//! # Emission rules
//!
//! Stages are emitted in their fixed ordinal order. For each stage:
//! before-hook (if any), the stage's handler, after-hook (if any;
//! non-terminating stages only). Once a terminating stage has been emitted,
//! hooks registered on *later* stages are dropped silently — they stay
//! configured but are never invoked in any traversal, matching the "branch
//! forks and nothing host-configured runs downstream" semantics. Later
//! stages' core handlers are still emitted, so a branch that declines a
//! request falls through to the next branch.

use crate::pipeline::{AssembledPipeline, PlannedStep, Step, StepKind};
use repowire_core::{
    AssemblyError, DynStageHandler, DynStageHook, HookTiming, Request, Stage, StageHandler,
    StageHook,
};
use std::collections::HashMap;

/// Builder for an [`AssembledPipeline`].
///
/// # Example
/// ```ignore
/// let pipeline = PipelineAssembler::new()
///     .with_handler(Stage::Cors, cors_handler)
///     .with_handler(Stage::Authentication, auth_handler)
///     // ... one handler per stage ...
///     .with_hook(Stage::Authentication, HookTiming::After, audit_hook)?
///     .assemble()?;
/// ```
pub struct PipelineAssembler<R: Request> {
    handlers: HashMap<Stage, Box<dyn DynStageHandler<R>>>,
    before: HashMap<Stage, Box<dyn DynStageHook<R>>>,
    after: HashMap<Stage, Box<dyn DynStageHook<R>>>,
}

impl<R: Request> Default for PipelineAssembler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Request> PipelineAssembler<R> {
    /// Create a new empty assembler.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            before: HashMap::new(),
            after: HashMap::new(),
        }
    }

    /// Bind a stage's core handler.
    ///
    /// Every stage needs exactly one handler by [`assemble`](Self::assemble)
    /// time; binding again replaces the previous handler.
    pub fn with_handler<H: StageHandler<R>>(mut self, stage: Stage, handler: H) -> Self {
        self.handlers.insert(stage, Box::new(handler));
        self
    }

    /// Place a caller-supplied hook before or after a stage's handler.
    ///
    /// At most one hook per position; placing again replaces the previous
    /// hook. A hook on a stage located after a terminating stage is accepted
    /// here but silently dropped at assembly (see the module docs).
    ///
    /// # Errors
    ///
    /// [`AssemblyError::InvalidHookPlacement`] for an `After` hook on a
    /// terminating stage: the after position is unreachable once the branch
    /// commits, and rejecting it loudly beats a hook that can never run.
    pub fn with_hook<H: StageHook<R>>(
        mut self,
        stage: Stage,
        timing: HookTiming,
        hook: H,
    ) -> Result<Self, AssemblyError> {
        if timing == HookTiming::After && stage.is_terminating() {
            return Err(AssemblyError::InvalidHookPlacement { stage, timing });
        }
        let slots = match timing {
            HookTiming::Before => &mut self.before,
            HookTiming::After => &mut self.after,
        };
        slots.insert(stage, Box::new(hook));
        Ok(self)
    }

    /// Emit the immutable pipeline.
    ///
    /// # Errors
    ///
    /// [`AssemblyError::MissingStageHandler`] naming the first stage with no
    /// bound handler. This surfaces at assembly, not mid-traversal, per the
    /// fail-before-traffic policy for configuration errors.
    pub fn assemble(mut self) -> Result<AssembledPipeline<R>, AssemblyError> {
        let mut steps = Vec::new();
        let mut plan = Vec::new();
        let mut branch_committed = false;

        for stage in Stage::ALL {
            if let Some(hook) = self.before.remove(&stage) {
                if branch_committed {
                    // Configured but unreachable: an earlier branching stage
                    // already forked the chain.
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        %stage,
                        "dropping before hook placed after a terminating stage"
                    );
                } else {
                    steps.push(Step::Hook(hook));
                    plan.push(PlannedStep {
                        stage,
                        kind: StepKind::BeforeHook,
                    });
                }
            }

            let handler = self
                .handlers
                .remove(&stage)
                .ok_or(AssemblyError::MissingStageHandler(stage))?;
            steps.push(Step::Handler { stage, handler });
            plan.push(PlannedStep {
                stage,
                kind: StepKind::Handler,
            });

            if let Some(hook) = self.after.remove(&stage) {
                // with_hook already rejected After on terminating stages, so
                // this position exists; it is only dead once a branch forked.
                if branch_committed {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        %stage,
                        "dropping after hook placed after a terminating stage"
                    );
                } else {
                    steps.push(Step::Hook(hook));
                    plan.push(PlannedStep {
                        stage,
                        kind: StepKind::AfterHook,
                    });
                }
            }

            if stage.is_terminating() {
                branch_committed = true;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(steps = plan.len(), "pipeline assembled");
        Ok(AssembledPipeline::new(steps, plan))
    }
}
