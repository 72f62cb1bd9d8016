//! Logging hook for request observation.

use repowire_core::{BoxError, Request, StageHook};

/// A hook that logs requests for debugging/observation.
pub struct LoggingHook;

impl<R: Request + std::fmt::Debug> StageHook<R> for LoggingHook {
    async fn run(&self, request: &mut R) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(?request, "Processing request");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = request; // Suppress unused warning
        }
        Ok(())
    }
}
