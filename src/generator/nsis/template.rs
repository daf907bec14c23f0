//! Fixed pieces of the generated NSI script.

/// Installer executable name written to `OutFile` unless overridden.
pub const DEFAULT_OUT_FILE: &str = "installer.exe";

/// Uninstaller written into the install directory.
pub const UNINSTALLER: &str = "uninstall.exe";

/// Compile-time define bound to the program name.
pub const APP_NAME_DEFINE: &str = "APP_NAME";

/// Compile-time define bound to the install directory.
pub const INSTALL_DIR_DEFINE: &str = "INSTALL_DIR";

/// Compile-time define bound to the icon path.
pub const ICON_DEFINE: &str = "ICON";

/// Runtime install directory.
pub const INSTDIR: &str = "$INSTDIR";

pub const INSTALL_SECTION: &str = "Installation";
pub const UNINSTALL_SECTION: &str = "Uninstall";

pub const INDENT: &str = "    ";

/// Reference to a define inside a script string, e.g. `${APP_NAME}`.
pub fn define_ref(name: &str) -> String {
    format!("${{{}}}", name)
}

/// Double-quotes a value for use as an NSIS string argument.
///
/// Values are embedded verbatim; callers guarantee they contain no quotes.
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}
