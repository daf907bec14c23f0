//! Reading install specs from JSON or TOML files.

use super::InstallSpecBuilder;
use crate::bail;
use crate::generator::error::{Context, Error, ErrorExt, Result};
use std::path::Path;

/// Spec file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Toml,
}

impl SpecFormat {
    /// Picks the format from the extension of `path` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .context(format!("spec file {} has no extension", path.display()))?;

        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(SpecFormat::Json),
            "toml" => Ok(SpecFormat::Toml),
            other => bail!(
                "unsupported spec file extension '.{}' (expected .json or .toml)",
                other
            ),
        }
    }

    fn name(self) -> &'static str {
        match self {
            SpecFormat::Json => "JSON",
            SpecFormat::Toml => "TOML",
        }
    }
}

/// Decode a spec from text in the given format.
pub fn parse_spec(content: &str, format: SpecFormat, path: &Path) -> Result<InstallSpecBuilder> {
    let parsed = match format {
        SpecFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SpecFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|reason| Error::SpecParse {
        format: format.name(),
        path: path.to_path_buf(),
        reason,
    })
}

/// Read and decode a spec file. The result is not validated yet.
pub async fn load_spec_file(path: &Path) -> Result<InstallSpecBuilder> {
    let format = SpecFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading spec file", path)?;

    log::debug!("Parsing {} spec {}", format.name(), path.display());
    parse_spec(&content, format, path)
}
