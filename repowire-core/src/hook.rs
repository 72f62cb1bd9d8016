//! Stage hook traits.
//!
//! A hook is caller-supplied logic bound to a `before` or `after` position of
//! one pipeline stage. Hooks are registered once at assembly time and are
//! immutable for the lifetime of the assembled pipeline; they run once per
//! request traversing their position.
//!
//! Hooks observe and mutate the per-request value but cannot consume the
//! request; only the stage handler decides that (see
//! [`crate::StageHandler`]).

use crate::{error::BoxError, request::Request};
use std::{future::Future, pin::Pin};

/// Caller-supplied logic run immediately before or after a stage's handler.
///
/// Like stage handlers, hooks must only mutate per-request state. A hook
/// error propagates uncaught to the host's error boundary and aborts the
/// traversal.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch. For the
/// assembled pipeline's heterogeneous step list, use [`DynStageHook`], which
/// every `StageHook` implements automatically.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `StageHook<{R}>`",
    label = "missing `StageHook` implementation",
    note = "Stage hooks must implement `run` for the request type `{R}`."
)]
pub trait StageHook<R: Request>: Send + Sync + 'static {
    /// Called when a request traverses this hook's position.
    fn run(&self, request: &mut R) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`StageHook`].
pub trait DynStageHook<R: Request>: Send + Sync + 'static {
    /// Called when a request traverses this hook's position (dynamic dispatch
    /// version).
    fn run_dyn<'a>(
        &'a self,
        request: &'a mut R,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any StageHook implements DynStageHook.
impl<R: Request, T: StageHook<R>> DynStageHook<R> for T {
    fn run_dyn<'a>(
        &'a self,
        request: &'a mut R,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.run(request))
    }
}

// Allow Box<dyn DynStageHook> to be used where StageHook is expected.
impl<R: Request> StageHook<R> for Box<dyn DynStageHook<R>> {
    async fn run(&self, request: &mut R) -> Result<(), BoxError> {
        (**self).run_dyn(request).await
    }
}
