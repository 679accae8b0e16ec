//! Diagnostic reporting for schema problems.
//!
//! Parsers never fail loudly on malformed payloads; they report what they
//! dropped through an injected [`DiagnosticSink`] and keep going. The sink is
//! observational only: swapping or removing it never changes a parse result.
//!
//! # Sinks
//!
//! - [`TracingSink`]: forwards to `tracing` events (default)
//! - [`NullSink`]: discards everything
//! - [`RecordingSink`]: keeps diagnostics in memory for inspection
//!
//! # Modules
//!
//! - [`init`]: `tracing-subscriber` setup for binaries and tests

mod init;

pub use init::init_tracing;

use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Receiver for parse diagnostics.
///
/// `source` names the reporting component (a type tag or `"factory"`).
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, level: Level, source: &str, message: &str);
}

/// Forwards diagnostics to `tracing` under the `component_kit::schema` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, level: Level, source: &str, message: &str) {
        match level {
            Level::Trace => tracing::trace!(target: "component_kit::schema", source, "{message}"),
            Level::Debug => tracing::debug!(target: "component_kit::schema", source, "{message}"),
            Level::Info => tracing::info!(target: "component_kit::schema", source, "{message}"),
            Level::Warn => tracing::warn!(target: "component_kit::schema", source, "{message}"),
            Level::Error => tracing::error!(target: "component_kit::schema", source, "{message}"),
        }
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn log(&self, _level: Level, _source: &str, _message: &str) {}
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    pub source: String,
    pub message: String,
}

/// Collects diagnostics in memory.
///
/// # Examples
///
/// ```
/// use component_kit::diagnostics::{DiagnosticSink, Level, RecordingSink};
///
/// let sink = RecordingSink::default();
/// sink.log(Level::Warn, "label", "missing text");
/// assert_eq!(sink.count_at_least(Level::Warn), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Number of diagnostics at `level` or more severe.
    #[must_use]
    pub fn count_at_least(&self, level: Level) -> usize {
        self.entries().iter().filter(|d| d.level >= level).count()
    }

    /// True if any recorded message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|d| d.message.contains(needle))
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, level: Level, source: &str, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Diagnostic {
                level,
                source: source.to_string(),
                message: message.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Warn > Level::Debug);
        assert!(Level::Error > Level::Warn);
        assert_eq!(Level::Warn.to_string(), "warn");
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::default();
        sink.log(Level::Debug, "label", "unknown alignment `diagonal`");
        sink.log(Level::Warn, "stack_view", "no valid items");

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source, "label");
        assert_eq!(entries[1].level, Level::Warn);
        assert_eq!(sink.count_at_least(Level::Warn), 1);
        assert!(sink.contains("diagonal"));
    }

    #[test]
    fn tracing_and_null_sinks_accept_every_level() {
        for level in [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error] {
            TracingSink.log(level, "factory", "message");
            NullSink.log(level, "factory", "message");
        }
    }
}
