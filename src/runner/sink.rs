//! Diagnostic sinks for streamed process output.
//!
//! A sink only observes chunks as they arrive; it never influences the
//! outcome of an invocation.

/// Receives output chunks while a process is running.
pub trait DiagnosticSink: Send + Sync {
    fn on_stdout(&self, chunk: &str);
    fn on_stderr(&self, chunk: &str);
}

/// Discards every chunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn on_stdout(&self, _chunk: &str) {}
    fn on_stderr(&self, _chunk: &str) {}
}

/// Forwards chunks to `tracing` at info level.
#[derive(Debug, Clone)]
pub struct TracingSink {
    label: String,
}

impl TracingSink {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl DiagnosticSink for TracingSink {
    fn on_stdout(&self, chunk: &str) {
        tracing::info!(target: "auggie_node::output", command = %self.label, stream = "stdout", "{}", chunk);
    }

    fn on_stderr(&self, chunk: &str) {
        tracing::info!(target: "auggie_node::output", command = %self.label, stream = "stderr", "{}", chunk);
    }
}
