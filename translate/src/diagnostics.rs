//! Diagnostic emission seam.
//!
//! The translator reports exactly one recoverable condition (a signature
//! with no return information at all). The report goes through a sink object
//! rather than a global logger so tests can record emissions without
//! installing a subscriber.

/// Receives warning-level diagnostics from the translator.
pub trait DiagnosticSink: Send + Sync {
    /// Report a recoverable condition.
    fn warning(&self, message: &str);
}

/// Default sink: forwards to [`tracing::warn!`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Sink that discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warning(&self, _message: &str) {}
}
