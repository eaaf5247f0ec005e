//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan
///
/// None of them is recoverable: a scan either completes or stops at the
/// first error.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Invalid configuration, detected before any line is read
    #[error("{0}")]
    Usage(String),

    #[error("error reading file: {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{reason} at: {line}: {text}")]
    MalformedLine {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl ScanError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn malformed(line: usize, text: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// Usage errors are reported with the CLI usage text instead of a bare error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
