//! NSIS utility functions.
//!
//! Path helpers and script file output.

use crate::generator::error::{ErrorExt, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Returns the last segment of `path`.
///
/// Both `/` and `\` count as separators so that Windows paths resolve the same
/// way on every host. Trailing separators are ignored.
///
/// - `"build/demo.exe"` -> `"demo.exe"`
/// - `"C:\\Apps\\demo.exe"` -> `"demo.exe"`
/// - `"demo.exe"` -> `"demo.exe"`
/// - `"dist/"` -> `"dist"`
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Joins a file name onto `$INSTDIR` with a Windows separator.
pub fn in_install_dir(name: &str) -> String {
    format!("{}\\{}", super::template::INSTDIR, name)
}

/// Write a script file, optionally with a UTF-8 BOM.
///
/// makensis reads a script as UTF-8 only when it starts with the BOM
/// (EF BB BF), which matters as soon as a label or path is not ASCII.
/// Parent directories are created as needed.
pub async fn write_script_file(path: &Path, content: &str, bom: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating script output directory", parent)?;
    }

    let mut file = tokio::fs::File::create(path)
        .await
        .fs_context("creating NSI script file", path)?;

    if bom {
        file.write_all(&[0xEF, 0xBB, 0xBF])
            .await
            .fs_context("writing UTF-8 BOM", path)?;
    }
    file.write_all(content.as_bytes())
        .await
        .fs_context("writing NSI content", path)?;
    file.flush().await.fs_context("flushing NSI file", path)?;

    Ok(())
}
