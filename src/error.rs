//! Error types for the command line tool.
//!
//! This module wraps generator errors together with the errors of the
//! surrounding I/O and argument handling, and maps them to exit codes.

use crate::generator::{self, SpecField};
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, MynsisError>;

/// Exit code for a rejected install spec.
pub const EXIT_INVALID_SPEC: i32 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum MynsisError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation, generation and script output errors
    #[error("{0}")]
    Generator(#[from] generator::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl MynsisError {
    /// The field that failed validation, if this is a validation error.
    pub fn invalid_field(&self) -> Option<SpecField> {
        match self {
            MynsisError::Generator(generator::Error::Validation(e)) => Some(e.field()),
            _ => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.invalid_field().is_some() {
            EXIT_INVALID_SPEC
        } else {
            EXIT_FAILURE
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        if let Some(field) = self.invalid_field() {
            return vec![format!("Set the {} with {}", field, field.flag())];
        }

        match self {
            MynsisError::Cli(_) => vec!["Run with --help to see the accepted arguments".to_string()],
            MynsisError::Generator(generator::Error::SpecParse { .. }) => {
                vec!["Check the spec file syntax and its keys".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
