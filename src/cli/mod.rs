//! Command line interface for mynsis.
//!
//! This module parses arguments, resolves runtime configuration and runs
//! script generation.

mod args;
pub mod commands;

pub use args::{Args, RuntimeConfig};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = RuntimeConfig::from(&args);
    log::debug!("Runtime configuration: {:?}", runtime_config);

    commands::generate(&args, &runtime_config).await
}
