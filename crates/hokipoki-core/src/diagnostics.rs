//! Diagnostic channel
//!
//! Progress notices and non-fatal warnings (stderr output of the CLI, failed
//! completion lookups) go to an injected [`DiagnosticSink`] and never into
//! the message returned to the host.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Log target used by [`TracingSink`]
pub const LOG_TARGET: &str = "hokipoki";

/// Receiver of diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// Progress information
    fn info(&self, message: &str);

    /// Something went wrong but the invocation continues
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Info,
    Warn,
}

/// A recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Keeps diagnostics in memory so a host can show or inspect them later
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Messages recorded at warn level
    pub fn warnings(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Warn)
    }

    /// Messages recorded at info level
    pub fn infos(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Info)
    }

    fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|d| d.level == level)
            .map(|d| d.message.clone())
            .collect()
    }

    fn record(&self, level: DiagnosticLevel, message: &str) {
        self.entries.lock().push(Diagnostic {
            level,
            message: message.to_string(),
        });
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, message: &str) {
        self.record(DiagnosticLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(DiagnosticLevel::Warn, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_separates_levels() {
        let sink = MemorySink::new();
        sink.info("sending");
        sink.warn("stderr: deprecated flag");
        sink.info("done");

        assert_eq!(sink.infos(), vec!["sending", "done"]);
        assert_eq!(sink.warnings(), vec!["stderr: deprecated flag"]);
        assert_eq!(sink.entries().len(), 3);
    }
}
