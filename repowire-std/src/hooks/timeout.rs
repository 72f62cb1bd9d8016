//! Timeout wrappers for time-limited steps.

use repowire_core::{BoxError, Request, StageHandler, StageHook, StageOutcome};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Error returned when a wrapped step times out.
#[derive(Error, Debug, Clone)]
#[error("step execution timed out after {0:?}")]
pub struct TimeoutError(pub Duration);

/// A hook that wraps another hook with a timeout.
pub struct TimeoutHook<H> {
    inner: H,
    duration: Duration,
}

impl<H> TimeoutHook<H> {
    /// Create a new timeout hook.
    pub fn new(inner: H, duration: Duration) -> Self {
        Self { inner, duration }
    }
}

impl<R: Request, H: StageHook<R>> StageHook<R> for TimeoutHook<H> {
    async fn run(&self, request: &mut R) -> Result<(), BoxError> {
        match timeout(self.duration, self.inner.run(request)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError(self.duration))),
        }
    }
}

/// A stage handler that wraps another handler with a timeout.
pub struct TimeoutHandler<H> {
    inner: H,
    duration: Duration,
}

impl<H> TimeoutHandler<H> {
    /// Create a new timeout handler.
    pub fn new(inner: H, duration: Duration) -> Self {
        Self { inner, duration }
    }
}

impl<R: Request, H: StageHandler<R>> StageHandler<R> for TimeoutHandler<H> {
    async fn handle(&self, request: &mut R) -> Result<StageOutcome, BoxError> {
        match timeout(self.duration, self.inner.handle(request)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError(self.duration))),
        }
    }
}
