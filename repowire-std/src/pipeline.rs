//! Assembled pipeline and request traversal.
//!
//! An [`AssembledPipeline`] is the immutable result of
//! [`PipelineAssembler::assemble`](crate::assembler::PipelineAssembler::assemble):
//! an ordered sequence of executable steps. It is a read-only snapshot, safely
//! shared (e.g. via `Arc`) across arbitrarily many concurrent traversals; each
//! traversal owns its request exclusively and runs the steps sequentially.

use repowire_core::{BoxError, DynStageHandler, DynStageHook, Request, Stage, StageOutcome};
use std::fmt;

/// One executable step of an assembled pipeline.
///
/// The stage/timing a step belongs to lives in the parallel [`PlannedStep`]
/// list; execution only needs the callable and, for handlers, the stage to
/// report in the traversal outcome.
pub(crate) enum Step<R: Request> {
    /// A caller-supplied hook at a before/after position.
    Hook(Box<dyn DynStageHook<R>>),
    /// A stage's own core handler.
    Handler {
        stage: Stage,
        handler: Box<dyn DynStageHandler<R>>,
    },
}

/// The kind of a planned step, for introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// A hook running before its stage's handler.
    BeforeHook,
    /// A stage's own core handler.
    Handler,
    /// A hook running after its stage's handler.
    AfterHook,
}

/// Descriptor of one emitted step, for hosts that install the chain into
/// their own request plumbing and for tests asserting emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedStep {
    /// The stage this step belongs to.
    pub stage: Stage,
    /// What the step is.
    pub kind: StepKind,
}

/// Terminal outcome of one request's traversal.
///
/// `FellThrough` is not an error: it is a defined outcome the host must map
/// to its own default response (typically not-found). Treating it as an
/// internal failure would hide composition mistakes behind 500s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// A stage fully handled the request; the traversal ended there.
    Consumed(Stage),
    /// The request reached the end of the chain unconsumed.
    FellThrough,
}

/// An immutable, ordered chain of executable steps.
///
/// Created by `PipelineAssembler::assemble`. Stage order is fixed; the only
/// per-request variation is which branching stage, if any, consumes the
/// request.
pub struct AssembledPipeline<R: Request> {
    steps: Vec<Step<R>>,
    plan: Vec<PlannedStep>,
}

// The step callables are opaque, so debug output shows the emitted plan only.
impl<R: Request> fmt::Debug for AssembledPipeline<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssembledPipeline")
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}

impl<R: Request> AssembledPipeline<R> {
    pub(crate) fn new(steps: Vec<Step<R>>, plan: Vec<PlannedStep>) -> Self {
        Self { steps, plan }
    }

    /// The ordered step descriptors this pipeline will execute.
    pub fn plan(&self) -> &[PlannedStep] {
        &self.plan
    }

    /// Run one request through the chain.
    ///
    /// Steps execute sequentially: each stage's before-hook (if any), the
    /// stage handler, then its after-hook (non-terminating stages only). The
    /// traversal ends at the first handler returning
    /// [`StageOutcome::Consumed`]; reaching the end unconsumed yields
    /// [`Traversal::FellThrough`].
    ///
    /// # Errors
    ///
    /// Hook and handler errors are not caught here; they propagate unchanged
    /// to the caller's error boundary.
    pub async fn dispatch(&self, request: &mut R) -> Result<Traversal, BoxError> {
        for step in &self.steps {
            match step {
                // Call through the trait object explicitly: the boxes also
                // satisfy the static traits via the passthrough impls, so a
                // plain method call would resolve to the blanket impl on the
                // box itself and recurse.
                Step::Hook(hook) => hook.as_ref().run_dyn(request).await?,
                Step::Handler { stage, handler } => {
                    match handler.as_ref().handle_dyn(request).await? {
                        StageOutcome::Consumed => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(stage = %stage, "request consumed");
                            return Ok(Traversal::Consumed(*stage));
                        }
                        StageOutcome::Declined => {}
                    }
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("request fell through the chain unconsumed");
        Ok(Traversal::FellThrough)
    }
}
