//! Diagnostic sinks for lookup and alert-creation outcomes.
//!
//! Resolvers and alert creation never fail hard on transport problems or
//! missing entities. They report through a [`Diagnostics`] sink instead and
//! hand back an empty identifier. Three sinks are provided:
//!
//! - [`TracingDiagnostics`] forwards to `tracing` events
//! - [`WorkflowCommands`] prints GitHub Actions workflow commands
//! - [`RecordingDiagnostics`] keeps emissions in memory for assertions

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, error, warn};

/// Severity of a diagnostic emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warning,
    Error,
}

impl Level {
    /// Workflow command name for this level.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Sink for diagnostics emitted while resolving names and creating alerts.
pub trait Diagnostics: Send + Sync {
    /// Emit a message at the given level.
    fn emit(&self, level: Level, message: &str);

    /// Emit a debug message.
    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    /// Emit a warning.
    fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    /// Emit an error.
    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Debug => debug!("{message}"),
            Level::Warning => warn!("{message}"),
            Level::Error => error!("{message}"),
        }
    }
}

/// Emits GitHub Actions workflow commands (`::warning::...`) on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkflowCommands;

impl WorkflowCommands {
    /// Format a workflow command line for `message`.
    #[must_use]
    pub fn format(level: Level, message: &str) -> String {
        format!("::{}::{}", level.command(), escape_data(message))
    }
}

impl Diagnostics for WorkflowCommands {
    fn emit(&self, level: Level, message: &str) {
        let line = Self::format(level, message);
        let mut stdout = std::io::stdout().lock();
        // A closed stdout leaves nowhere else to report to.
        let _ = writeln!(stdout, "{line}");
    }
}

/// Escape command data the way the Actions runner expects.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingDiagnostics {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded emissions, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded messages at `level`, oldest first.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warning)
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages(Level::Error)
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}
