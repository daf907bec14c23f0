//! NSIS installer script generation
//!
//! This library turns installer metadata (program name, install directory,
//! icon, file manifest and main file) into an NSIS script:
//! - [`generator`] validates the metadata and renders the script
//! - [`config`] persists form values between runs
//! - [`locale`] provides the labels used in scripts and messages
//! - [`cli`] exposes all of it as the `mynsis` command
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod locale;

// Re-export commonly used types
pub use error::{CliError, MynsisError, Result};
pub use generator::{GeneratedScript, InstallSpec, InstallSpecBuilder, ScriptBuilder};
