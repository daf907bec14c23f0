//! Saved form values.
//!
//! Remembers the program name, install directory and icon between runs in a
//! small JSON file. Values are loaded and saved explicitly by the caller.
//!
//! Files written by earlier releases used French keys (`nom_programme`,
//! `chemin_installation`, `icone`); those are still accepted on load.

use crate::error::Result;
use crate::generator::InstallSpecBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Form values persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedSettings {
    #[serde(alias = "nom_programme")]
    pub program_name: String,

    #[serde(alias = "chemin_installation")]
    pub install_dir: String,

    #[serde(alias = "icone")]
    pub icon_path: String,
}

impl SavedSettings {
    /// Seeds a spec builder with the saved values.
    pub fn to_builder(&self) -> InstallSpecBuilder {
        InstallSpecBuilder::new()
            .program_name(self.program_name.clone())
            .install_dir(self.install_dir.clone())
            .icon_path(self.icon_path.clone())
    }
}

impl From<&InstallSpecBuilder> for SavedSettings {
    fn from(builder: &InstallSpecBuilder) -> Self {
        Self {
            program_name: builder.current_program_name().trim().to_string(),
            install_dir: builder.current_install_dir().trim().to_string(),
            icon_path: builder.current_icon_path().trim().to_string(),
        }
    }
}

/// Load saved settings from `path`.
///
/// A missing file yields defaults. A file that cannot be read or parsed is
/// logged and also yields defaults, so a damaged settings file never blocks
/// generation.
pub async fn load(path: &Path) -> SavedSettings {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No saved settings at {}", path.display());
            return SavedSettings::default();
        }
        Err(e) => {
            log::error!("Failed to read settings {}: {}", path.display(), e);
            return SavedSettings::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            log::error!("Failed to parse settings {}: {}", path.display(), e);
            SavedSettings::default()
        }
    }
}

/// Save `settings` to `path` as JSON indented with four spaces.
pub async fn save(path: &Path, settings: &SavedSettings) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    settings.serialize(&mut serializer)?;

    tokio::fs::write(path, &buffer).await?;
    log::info!("Settings saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = load(&dir.path().join("absent.json")).await;
        assert_eq!(settings, SavedSettings::default());
    }

    #[tokio::test]
    async fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write fixture");

        assert_eq!(load(&path).await, SavedSettings::default());
    }

    #[tokio::test]
    async fn reads_legacy_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"nom_programme": "Demo", "chemin_installation": "C:\\Apps\\Demo", "icone": ""}"#,
        )
        .expect("write fixture");

        let settings = load(&path).await;
        assert_eq!(settings.program_name, "Demo");
        assert_eq!(settings.install_dir, "C:\\Apps\\Demo");
        assert!(settings.icon_path.is_empty());
    }

    #[tokio::test]
    async fn saves_with_four_space_indent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        let settings = SavedSettings {
            program_name: "Demo".into(),
            install_dir: "$PROGRAMFILES\\Demo".into(),
            icon_path: "app.ico".into(),
        };

        save(&path, &settings).await.expect("save settings");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.starts_with("{\n    \"program_name\": \"Demo\""));
        assert_eq!(load(&path).await, settings);
    }
}
