//! Logger adapter forwarding to `tracing`.

use gyre_application::Logger;

/// Logger implementation that emits the provider's messages as tracing
/// events, rendering the full cause chain into info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates a new tracing-backed logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str, cause: Option<&dyn std::error::Error>) {
        match cause {
            Some(cause) => tracing::info!(cause = %render_chain(cause), "{message}"),
            None => tracing::info!("{message}"),
        }
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Renders an error and its sources as a single `a: b: c` line.
fn render_chain(error: &dyn std::error::Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
