//! Error types for script generation and its file I/O.

use super::spec::ValidationError;
use std::{fmt::Display, path::PathBuf};
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing, generating or writing a script.
///
/// Generation itself is total; everything here comes either from the
/// validator or from the I/O that surrounds generation.
#[derive(Error, Debug)]
pub enum Error {
    /// The install spec was rejected before generation.
    #[error("invalid install spec: {0}")]
    Validation(#[from] ValidationError),

    /// A filesystem operation failed on a known path.
    #[error("{context} ({}): {source}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A spec file could not be decoded.
    #[error("failed to parse {format} spec {}: {reason}", .path.display())]
    SpecParse {
        /// "JSON" or "TOML"
        format: &'static str,
        /// File that failed to parse
        path: PathBuf,
        /// Decoder message
        reason: String,
    },

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap an IO error with a description and the path it happened on.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.into(),
            source,
        })
    }
}

/// Turn an absent value into a [`Error::GenericError`].
pub trait Context<T> {
    /// Fail with `context` when the value is missing.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::generator::Error::GenericError(format!($($arg)*)).into())
    };
}
