//! NSIS installer script output.
//!
//! # Module Organization
//!
//! - `template` - Fixed script names and quoting helpers
//! - `script` - [`ScriptBuilder`] and the generated document
//! - `utils` - Base-name resolution and script file writing

mod script;
mod template;
mod utils;

pub use script::{GeneratedScript, ScriptBuilder, ScriptOptions, build_script};
pub use template::{DEFAULT_OUT_FILE, UNINSTALLER};
pub use utils::base_name;

use crate::generator::error::Result;
use std::path::Path;

/// Write a generated script to `path`.
///
/// The UTF-8 BOM is prepended when `bom` is true; parent directories are
/// created as needed.
pub async fn write_script(path: &Path, script: &GeneratedScript, bom: bool) -> Result<()> {
    log::info!("Writing NSI script to {}", path.display());

    utils::write_script_file(path, script.as_str(), bom).await?;

    log::debug!("NSI script SHA256: {}", script.sha256());
    Ok(())
}
