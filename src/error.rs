//! Error types with contextual suggestions
//!
//! Structured errors for the two failure modes the tracker owns (a corrupt
//! store and a duplicate measurement), with actionable messages and proper
//! exit codes for CI/CD. Everything else — git failures, compression
//! failures, unreadable artifacts — propagates unmodified to the host
//! build process; none of those are transient faults a retry could fix.

use std::path::PathBuf;
use thiserror::Error;

/// Tracker errors with contextual suggestions
#[derive(Error, Debug)]
pub enum SizewatchError {
    /// Persisted store content failed to parse as a size history
    #[error("size store at {path} is not a valid history document")]
    CorruptStore {
        /// Path of the unparseable store file
        path: PathBuf,
        #[source]
        /// Parse error source
        source: serde_json::Error,
    },

    /// A measurement for (artifact, revision) already exists
    #[error("artifact '{name}' is already recorded for revision {revision}")]
    DuplicateMeasurement {
        /// Artifact name that was measured twice
        name: String,
        /// Revision the duplicate was recorded under
        revision: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SizewatchError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sizewatch::error::SizewatchError;
    ///
    /// let error = SizewatchError::DuplicateMeasurement {
    ///     name: "bundle.js".to_string(),
    ///     revision: "abc123".to_string(),
    /// };
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("--overwrite"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::CorruptStore { path, .. } => Some(format!(
                "Remove {} by hand to start a fresh history (recorded measurements will be lost)",
                path.display()
            )),
            Self::DuplicateMeasurement { .. } => Some(
                "Pass --overwrite (or set the overwrite option) to replace the recorded measurement"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions where one applies.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CorruptStore { .. } => 65, // EX_DATAERR
            Self::DuplicateMeasurement { .. } => 1, // Generic error (CI should fail)
            Self::Io { .. } => 74,           // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with cause chain and suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to SizewatchError for suggestions
        if let Some(tracker_error) = error.downcast_ref::<SizewatchError>() {
            if let Some(suggestion) = tracker_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(tracker_error) = error.downcast_ref::<SizewatchError>() {
            tracker_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
