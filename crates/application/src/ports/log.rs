//! Diagnostic log port

/// Port for the provider's diagnostic messages.
///
/// The provider emits a fixed set of messages at fixed levels; keeping
/// them behind a port lets tests verify the exact sequence. The
/// production adapter forwards to `tracing`.
pub trait Logger: Send + Sync {
    /// Emits a debug-level message.
    fn debug(&self, message: &str);

    /// Emits an info-level message, optionally with the error that
    /// prompted it.
    fn info(&self, message: &str, cause: Option<&dyn std::error::Error>);

    /// Emits an error-level message.
    fn error(&self, message: &str);
}
