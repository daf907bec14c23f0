//! Validated installer metadata.

/// Validated installer metadata.
///
/// Only [`InstallSpecBuilder::build`](super::InstallSpecBuilder::build) creates
/// values of this type, so every instance satisfies:
///
/// - `program_name` and `install_dir` are non-empty and trimmed
/// - `files` is non-empty and keeps the order it was given in
/// - `main_file` is an exact element of `files`
/// - no field contains a double quote or a line break
///
/// # Examples
///
/// ```
/// use mynsis::generator::InstallSpecBuilder;
///
/// let spec = InstallSpecBuilder::new()
///     .program_name("Demo")
///     .install_dir("$PROGRAMFILES\\Demo")
///     .file("build/demo.exe")
///     .main_file("build/demo.exe")
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.program_name(), "Demo");
/// assert!(!spec.has_icon());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSpec {
    program_name: String,
    install_dir: String,
    icon_path: String,
    files: Vec<String>,
    main_file: String,
}

impl InstallSpec {
    /// Program name, used for the `APP_NAME` define and shortcut names.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Default installation root.
    pub fn install_dir(&self) -> &str {
        &self.install_dir
    }

    /// Path to the `.ico` resource. Empty when no icon was configured.
    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    /// Returns true when an icon was configured.
    pub fn has_icon(&self) -> bool {
        !self.icon_path.is_empty()
    }

    /// Source paths to stage, in emission order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// The file that shortcuts point to, as given in [`files`](Self::files).
    pub fn main_file(&self) -> &str {
        &self.main_file
    }

    pub(super) fn new(
        program_name: String,
        install_dir: String,
        icon_path: String,
        files: Vec<String>,
        main_file: String,
    ) -> Self {
        Self {
            program_name,
            install_dir,
            icon_path,
            files,
            main_file,
        }
    }
}
