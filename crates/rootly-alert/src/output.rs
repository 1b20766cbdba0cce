//! Action outputs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::AlertError;

/// Name of the output carrying the created alert's identifier.
pub const ALERT_ID_OUTPUT: &str = "alert-id";

/// Environment variable naming the runner's output file.
const ENV_GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Delimiter for multi-line output values.
const MULTILINE_DELIMITER: &str = "ROOTLY_ALERT_OUTPUT_EOF";

/// Where action outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutput {
    /// Append `name=value` lines to the runner's output file.
    File(PathBuf),
    /// Print values on stdout.
    Stdout,
}

impl ActionOutput {
    /// Use `GITHUB_OUTPUT` when set, stdout otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(ENV_GITHUB_OUTPUT) {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Stdout,
        }
    }

    /// Publish an output value.
    ///
    /// # Errors
    /// Returns error if the output file cannot be written, or if a multi-line
    /// value contains the heredoc delimiter.
    pub fn set(&self, name: &str, value: &str) -> Result<(), AlertError> {
        match self {
            Self::File(path) => {
                let entry = format_entry(name, value)?;
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(entry.as_bytes())?;
                debug!(name = %name, path = %path.display(), "Wrote action output");
            }
            Self::Stdout => println!("{value}"),
        }
        Ok(())
    }
}

/// Format one output-file entry, using heredoc syntax for multi-line values.
fn format_entry(name: &str, value: &str) -> Result<String, AlertError> {
    if !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{name}={value}\n"));
    }
    if value.contains(MULTILINE_DELIMITER) {
        return Err(AlertError::Config(format!(
            "output '{name}' contains the reserved delimiter {MULTILINE_DELIMITER}"
        )));
    }
    Ok(format!(
        "{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n"
    ))
}
