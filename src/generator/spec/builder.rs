//! Builder for constructing an [`InstallSpec`].

use super::{InstallSpec, ValidationError, validate};

/// Raw installer metadata as collected from a form, a spec file or flags.
///
/// Nothing is checked until [`build`](Self::build) is called. Spec files
/// deserialize directly into this type:
///
/// ```toml
/// program_name = "Demo"
/// install_dir = "C:\\Apps\\Demo"
/// icon_path = "icons/app.ico"
/// files = ["build/demo.exe", "build/readme.txt"]
/// main_file = "build/demo.exe"
/// ```
///
/// # Examples
///
/// ```
/// use mynsis::generator::{InstallSpecBuilder, SpecField};
///
/// let err = InstallSpecBuilder::new()
///     .program_name("Demo")
///     .build()
///     .unwrap_err();
///
/// assert_eq!(err.field(), SpecField::InstallDir);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallSpecBuilder {
    pub(crate) program_name: String,
    pub(crate) install_dir: String,
    #[serde(alias = "icon")]
    pub(crate) icon_path: String,
    pub(crate) files: Vec<String>,
    pub(crate) main_file: Option<String>,
}

impl InstallSpecBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the program name.
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    /// Sets the default installation directory.
    ///
    /// May be absolute (`C:\Apps\Demo`) or relative to an NSIS variable
    /// (`$PROGRAMFILES\Demo`).
    pub fn install_dir(mut self, dir: impl Into<String>) -> Self {
        self.install_dir = dir.into();
        self
    }

    /// Sets the icon path. An empty string means no icon.
    pub fn icon_path(mut self, path: impl Into<String>) -> Self {
        self.icon_path = path.into();
        self
    }

    /// Replaces the file list.
    pub fn files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one file to the list.
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Designates the file shortcuts point to. Must match an entry of the
    /// file list exactly.
    pub fn main_file(mut self, file: impl Into<String>) -> Self {
        self.main_file = Some(file.into());
        self
    }

    /// Layers `other` on top of `self`.
    ///
    /// Text fields of `other` win when non-empty, its file list wins when
    /// non-empty, and its main file wins when set.
    ///
    /// A blank value in `other` therefore never clears a value of `self`: an
    /// empty `icon_path` in a spec file keeps a saved icon. Use the setters
    /// (e.g. `icon_path("")`) to clear a field explicitly.
    pub fn overlay(self, other: InstallSpecBuilder) -> Self {
        fn pick(base: String, top: String) -> String {
            if top.trim().is_empty() { base } else { top }
        }

        Self {
            program_name: pick(self.program_name, other.program_name),
            install_dir: pick(self.install_dir, other.install_dir),
            icon_path: pick(self.icon_path, other.icon_path),
            files: if other.files.is_empty() {
                self.files
            } else {
                other.files
            },
            main_file: other.main_file.or(self.main_file),
        }
    }

    /// Current program name, untrimmed.
    pub fn current_program_name(&self) -> &str {
        &self.program_name
    }

    /// Current install directory, untrimmed.
    pub fn current_install_dir(&self) -> &str {
        &self.install_dir
    }

    /// Current icon path, untrimmed.
    pub fn current_icon_path(&self) -> &str {
        &self.icon_path
    }

    /// Trims the text fields, validates, and freezes the result.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, in the order documented on
    /// [`validate`].
    pub fn build(self) -> Result<InstallSpec, ValidationError> {
        let trimmed = Self {
            program_name: self.program_name.trim().to_string(),
            install_dir: self.install_dir.trim().to_string(),
            icon_path: self.icon_path.trim().to_string(),
            files: self.files,
            main_file: self.main_file,
        };

        validate(&trimmed)?;

        let Some(main_file) = trimmed.main_file else {
            return Err(ValidationError::MissingMainFile);
        };

        log::debug!(
            "Install spec for {} accepted with {} file(s)",
            trimmed.program_name,
            trimmed.files.len()
        );

        Ok(InstallSpec::new(
            trimmed.program_name,
            trimmed.install_dir,
            trimmed.icon_path,
            trimmed.files,
            main_file,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_trims_text_fields_but_not_files() {
        let spec = InstallSpecBuilder::new()
            .program_name("  Demo \t")
            .install_dir(" C:\\Apps\\Demo ")
            .icon_path(" icons/app.ico\n")
            .file(" build/demo.exe")
            .main_file(" build/demo.exe")
            .build()
            .expect("spec should be valid");

        assert_eq!(spec.program_name(), "Demo");
        assert_eq!(spec.install_dir(), "C:\\Apps\\Demo");
        assert_eq!(spec.icon_path(), "icons/app.ico");
        assert_eq!(spec.files(), [" build/demo.exe"]);
        assert_eq!(spec.main_file(), " build/demo.exe");
    }

    #[test]
    fn whitespace_only_icon_means_no_icon() {
        let spec = InstallSpecBuilder::new()
            .program_name("Demo")
            .install_dir("C:\\Demo")
            .icon_path("   ")
            .files(["a.exe"])
            .main_file("a.exe")
            .build()
            .expect("spec should be valid");

        assert!(!spec.has_icon());
    }

    #[test]
    fn deserializes_from_toml_with_icon_alias() {
        let builder: InstallSpecBuilder = toml::from_str(
            r#"
program_name = "Demo"
install_dir = "C:\\Apps\\Demo"
icon = "icons/app.ico"
files = ["build/demo.exe", "build/readme.txt"]
main_file = "build/demo.exe"
"#,
        )
        .expect("valid TOML");

        let spec = builder.build().expect("spec should be valid");
        assert_eq!(spec.icon_path(), "icons/app.ico");
        assert_eq!(spec.files().len(), 2);
    }

    #[test]
    fn overlay_keeps_base_values_for_unset_fields() {
        let saved = InstallSpecBuilder::new()
            .program_name("Saved")
            .install_dir("C:\\Saved")
            .icon_path("saved.ico");
        let from_file = InstallSpecBuilder::new()
            .install_dir("  ")
            .icon_path("file.ico")
            .files(["a.exe", "b.dll"])
            .main_file("a.exe");

        let merged = saved.overlay(from_file);

        assert_eq!(merged.current_program_name(), "Saved");
        assert_eq!(merged.current_install_dir(), "C:\\Saved");
        assert_eq!(merged.current_icon_path(), "file.ico");
        assert_eq!(merged.files, ["a.exe", "b.dll"]);
        assert_eq!(merged.main_file.as_deref(), Some("a.exe"));
    }

    #[test]
    fn blank_overlay_keeps_icon_but_setter_clears_it() {
        let saved = InstallSpecBuilder::new().icon_path("saved.ico");

        let merged = saved.overlay(InstallSpecBuilder::new().icon_path(""));
        assert_eq!(merged.current_icon_path(), "saved.ico");

        let cleared = merged.icon_path("");
        assert_eq!(cleared.current_icon_path(), "");
    }

    #[test]
    fn rejects_unknown_keys() {
        let parsed: Result<InstallSpecBuilder, _> =
            serde_json::from_str(r#"{"program_name": "Demo", "version": "1.0"}"#);
        assert!(parsed.is_err());
    }
}
