//! Stage handler traits.
//!
//! A stage handler is the core collaborator bound to one pipeline stage. It is
//! the only step kind that can end a traversal: it either consumes the request
//! or declines it so the next step runs. Hooks (see [`crate::StageHook`]) can
//! only observe and mutate the request, never consume it.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`StageHandler`] uses native `async fn` for zero-cost static dispatch.
//! The assembled pipeline stores heterogeneous handlers, so it works with the
//! object-safe [`DynStageHandler`], which every `StageHandler` implements
//! automatically.

use crate::{error::BoxError, request::Request};
use std::{future::Future, pin::Pin};

/// Result of a stage handler deciding what happens to the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage fully handled the request; the traversal ends here.
    Consumed,
    /// The stage did not claim the request; the next step runs.
    Declined,
}

/// The core collaborator bound to one pipeline stage.
///
/// Handlers run once per request reaching their stage, in fixed chain order.
/// A handler must only mutate the request it is given, never shared pipeline
/// state; the assembled pipeline is an immutable snapshot shared across tasks.
///
/// Errors are not caught by the pipeline: a failing handler propagates to the
/// host's own error boundary.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `StageHandler<{R}>`",
    label = "missing `StageHandler` implementation",
    note = "Stage handlers must implement `handle` for the request type `{R}`."
)]
pub trait StageHandler<R: Request>: Send + Sync + 'static {
    /// Called when a request reaches this handler's stage.
    fn handle(
        &self,
        request: &mut R,
    ) -> impl Future<Output = Result<StageOutcome, BoxError>> + Send;
}

/// Dynamic object-safe version of [`StageHandler`].
///
/// Use this trait when you need runtime polymorphism (e.g., in an assembled
/// pipeline's step list).
pub trait DynStageHandler<R: Request>: Send + Sync + 'static {
    /// Called when a request reaches this handler's stage (dynamic dispatch
    /// version).
    fn handle_dyn<'a>(
        &'a self,
        request: &'a mut R,
    ) -> Pin<Box<dyn Future<Output = Result<StageOutcome, BoxError>> + Send + 'a>>;
}

// Blanket implementation: any StageHandler implements DynStageHandler.
impl<R: Request, T: StageHandler<R>> DynStageHandler<R> for T {
    fn handle_dyn<'a>(
        &'a self,
        request: &'a mut R,
    ) -> Pin<Box<dyn Future<Output = Result<StageOutcome, BoxError>> + Send + 'a>> {
        Box::pin(self.handle(request))
    }
}

// Allow Box<dyn DynStageHandler> to be used where StageHandler is expected.
impl<R: Request> StageHandler<R> for Box<dyn DynStageHandler<R>> {
    async fn handle(&self, request: &mut R) -> Result<StageOutcome, BoxError> {
        (**self).handle_dyn(request).await
    }
}
