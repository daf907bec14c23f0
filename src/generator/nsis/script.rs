//! NSIS installer script generation.
//!
//! Renders an [`InstallSpec`] into an NSI script: defines and installer
//! attributes, an install section that stages files and creates shortcuts,
//! and an uninstall section that removes them again.
//!
//! Staging refers to each file by its source path, because makensis reads the
//! bytes from there at compile time. Removal refers to the base name under
//! `$INSTDIR`, because that is where `File` put the copy.

use super::{
    template::{
        APP_NAME_DEFINE, DEFAULT_OUT_FILE, ICON_DEFINE, INDENT, INSTALL_DIR_DEFINE,
        INSTALL_SECTION, INSTDIR, UNINSTALL_SECTION, UNINSTALLER, define_ref, quoted,
    },
    utils::{base_name, in_install_dir},
};
use crate::generator::spec::InstallSpec;
use crate::locale::Locale;
use sha2::{Digest, Sha256};
use std::fmt;

/// Settings that shape the script but are not part of the install spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Installer executable produced by makensis (`OutFile`).
    pub out_file: String,

    /// Name of the start-menu shortcut that launches the uninstaller,
    /// without the `.lnk` extension.
    pub uninstall_label: String,
}

impl ScriptOptions {
    /// Default options with labels taken from `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            out_file: DEFAULT_OUT_FILE.to_string(),
            uninstall_label: locale.labels().uninstall_shortcut.to_string(),
        }
    }
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// A generated NSI script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    text: String,
}

impl GeneratedScript {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Hex-encoded SHA-256 of the script text (without any BOM).
    pub fn sha256(&self) -> String {
        format!("{:x}", Sha256::digest(self.text.as_bytes()))
    }
}

impl fmt::Display for GeneratedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Generate a script with default options.
pub fn build_script(spec: &InstallSpec) -> GeneratedScript {
    ScriptBuilder::new(spec).build()
}

/// Builds an NSI script from a validated [`InstallSpec`].
///
/// Generation cannot fail and has no side effects: the same spec and options
/// always produce byte-identical text.
///
/// # Examples
///
/// ```
/// use mynsis::generator::{InstallSpecBuilder, ScriptBuilder, ScriptOptions};
/// use mynsis::locale::Locale;
///
/// let spec = InstallSpecBuilder::new()
///     .program_name("Demo")
///     .install_dir("C:\\Apps\\Demo")
///     .files(["build/demo.exe", "build/readme.txt"])
///     .main_file("build/demo.exe")
///     .build()
///     .unwrap();
///
/// let script = ScriptBuilder::new(&spec)
///     .options(ScriptOptions::for_locale(Locale::En))
///     .build();
///
/// assert!(script.as_str().contains("File \"build/readme.txt\""));
/// assert!(script.as_str().contains("Delete \"$INSTDIR\\readme.txt\""));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptBuilder<'a> {
    spec: &'a InstallSpec,
    options: ScriptOptions,
}

impl<'a> ScriptBuilder<'a> {
    pub fn new(spec: &'a InstallSpec) -> Self {
        Self {
            spec,
            options: ScriptOptions::default(),
        }
    }

    /// Replaces the script options.
    pub fn options(mut self, options: ScriptOptions) -> Self {
        self.options = options;
        self
    }

    /// Renders the script.
    pub fn build(&self) -> GeneratedScript {
        let mut lines = Vec::with_capacity(32 + 2 * self.spec.files().len());

        self.emit_header(&mut lines);
        lines.push(String::new());

        lines.push(format!("Section {}", quoted(INSTALL_SECTION)));
        lines.push(format!("{INDENT}SetOutPath {}", quoted(INSTDIR)));
        lines.push(String::new());
        lines.push(format!("{INDENT}# Files to install"));
        emit_file_entries(self.spec.files(), &mut lines);
        lines.push(String::new());
        lines.push(format!("{INDENT}# Shortcuts"));
        self.emit_shortcuts(&mut lines);
        lines.push(String::new());
        lines.push(format!(
            "{INDENT}WriteUninstaller {}",
            quoted(&in_install_dir(UNINSTALLER))
        ));
        lines.push("SectionEnd".to_string());
        lines.push(String::new());

        lines.push(format!("Section {}", quoted(UNINSTALL_SECTION)));
        self.emit_uninstall_commands(&mut lines);
        lines.push("SectionEnd".to_string());

        let mut text = lines.join("\n");
        text.push('\n');

        GeneratedScript { text }
    }

    /// Defines plus installer attributes.
    fn emit_header(&self, lines: &mut Vec<String>) {
        let spec = self.spec;

        lines.push(format!(
            "!define {APP_NAME_DEFINE} {}",
            quoted(spec.program_name())
        ));
        lines.push(format!(
            "!define {INSTALL_DIR_DEFINE} {}",
            quoted(spec.install_dir())
        ));
        lines.push(format!("!define {ICON_DEFINE} {}", quoted(spec.icon_path())));
        lines.push(String::new());

        lines.push(format!("Name {}", quoted(&define_ref(APP_NAME_DEFINE))));
        lines.push(format!("OutFile {}", quoted(&self.options.out_file)));
        lines.push(format!(
            "InstallDir {}",
            quoted(&define_ref(INSTALL_DIR_DEFINE))
        ));
        // makensis rejects `Icon ""`
        if spec.has_icon() {
            lines.push(format!("Icon {}", quoted(&define_ref(ICON_DEFINE))));
        }
        lines.push("ShowInstDetails show".to_string());
    }

    /// Desktop shortcut, start-menu folder with program and uninstall shortcuts.
    fn emit_shortcuts(&self, lines: &mut Vec<String>) {
        let app_name = define_ref(APP_NAME_DEFINE);
        let target = quoted(&in_install_dir(base_name(self.spec.main_file())));
        let icon = if self.spec.has_icon() {
            format!(
                " \"\" {}",
                quoted(&in_install_dir(&define_ref(ICON_DEFINE)))
            )
        } else {
            String::new()
        };

        lines.push(format!(
            "{INDENT}CreateShortcut {} {target}{icon}",
            quoted(&desktop_shortcut(&app_name))
        ));
        lines.push(format!(
            "{INDENT}CreateDirectory {}",
            quoted(&start_menu_dir(&app_name))
        ));
        lines.push(format!(
            "{INDENT}CreateShortcut {} {target}{icon}",
            quoted(&start_menu_entry(&app_name, &app_name))
        ));
        lines.push(format!(
            "{INDENT}CreateShortcut {} {}",
            quoted(&start_menu_entry(&app_name, &self.options.uninstall_label)),
            quoted(&in_install_dir(UNINSTALLER))
        ));
    }

    /// Installed files, shortcuts, start-menu folder, uninstaller, install dir.
    fn emit_uninstall_commands(&self, lines: &mut Vec<String>) {
        let app_name = define_ref(APP_NAME_DEFINE);

        for file in self.spec.files() {
            lines.push(format!(
                "{INDENT}Delete {}",
                quoted(&in_install_dir(base_name(file)))
            ));
        }

        lines.push(format!(
            "{INDENT}Delete {}",
            quoted(&desktop_shortcut(&app_name))
        ));
        lines.push(format!(
            "{INDENT}Delete {}",
            quoted(&start_menu_entry(&app_name, &app_name))
        ));
        lines.push(format!(
            "{INDENT}Delete {}",
            quoted(&start_menu_entry(&app_name, &self.options.uninstall_label))
        ));
        lines.push(format!(
            "{INDENT}RMDir {}",
            quoted(&start_menu_dir(&app_name))
        ));
        lines.push(format!(
            "{INDENT}Delete {}",
            quoted(&in_install_dir(UNINSTALLER))
        ));
        lines.push(format!("{INDENT}RMDir {}", quoted(INSTDIR)));
    }
}

/// One `File` instruction per source path, in input order.
fn emit_file_entries(files: &[String], lines: &mut Vec<String>) {
    lines.extend(files.iter().map(|file| format!("{INDENT}File {}", quoted(file))));
}

fn desktop_shortcut(name: &str) -> String {
    format!("$DESKTOP\\{name}.lnk")
}

fn start_menu_dir(app_name: &str) -> String {
    format!("$SMPROGRAMS\\{app_name}")
}

fn start_menu_entry(app_name: &str, name: &str) -> String {
    format!("{}\\{name}.lnk", start_menu_dir(app_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::InstallSpecBuilder;

    fn demo_spec() -> InstallSpec {
        InstallSpecBuilder::new()
            .program_name("Demo")
            .install_dir("C:\\Apps\\Demo")
            .icon_path("icons/app.ico")
            .files(["build/demo.exe", "build/readme.txt"])
            .main_file("build/demo.exe")
            .build()
            .expect("demo spec is valid")
    }

    fn position(script: &str, needle: &str) -> usize {
        script
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in:\n{script}"))
    }

    #[test]
    fn demo_script_matches_expected_text() {
        let expected = r#"!define APP_NAME "Demo"
!define INSTALL_DIR "C:\Apps\Demo"
!define ICON "icons/app.ico"

Name "${APP_NAME}"
OutFile "installer.exe"
InstallDir "${INSTALL_DIR}"
Icon "${ICON}"
ShowInstDetails show

Section "Installation"
    SetOutPath "$INSTDIR"

    # Files to install
    File "build/demo.exe"
    File "build/readme.txt"

    # Shortcuts
    CreateShortcut "$DESKTOP\${APP_NAME}.lnk" "$INSTDIR\demo.exe" "" "$INSTDIR\${ICON}"
    CreateDirectory "$SMPROGRAMS\${APP_NAME}"
    CreateShortcut "$SMPROGRAMS\${APP_NAME}\${APP_NAME}.lnk" "$INSTDIR\demo.exe" "" "$INSTDIR\${ICON}"
    CreateShortcut "$SMPROGRAMS\${APP_NAME}\Uninstall.lnk" "$INSTDIR\uninstall.exe"

    WriteUninstaller "$INSTDIR\uninstall.exe"
SectionEnd

Section "Uninstall"
    Delete "$INSTDIR\demo.exe"
    Delete "$INSTDIR\readme.txt"
    Delete "$DESKTOP\${APP_NAME}.lnk"
    Delete "$SMPROGRAMS\${APP_NAME}\${APP_NAME}.lnk"
    Delete "$SMPROGRAMS\${APP_NAME}\Uninstall.lnk"
    RMDir "$SMPROGRAMS\${APP_NAME}"
    Delete "$INSTDIR\uninstall.exe"
    RMDir "$INSTDIR"
SectionEnd
"#;

        let spec = demo_spec();
        let script = ScriptBuilder::new(&spec)
            .options(ScriptOptions::for_locale(Locale::En))
            .build();

        assert_eq!(script.as_str(), expected);
    }

    #[test]
    fn generation_is_deterministic() {
        let spec = demo_spec();
        let first = build_script(&spec);
        let second = build_script(&spec);

        assert_eq!(first, second);
        assert_eq!(first.sha256(), second.sha256());
        assert_eq!(first.sha256().len(), 64);
    }

    #[test]
    fn install_uses_source_paths_and_uninstall_uses_base_names() {
        let spec = InstallSpecBuilder::new()
            .program_name("Tool")
            .install_dir("$PROGRAMFILES\\Tool")
            .files(["C:\\src\\bin\\tool.exe", "assets/data/config.ini", "LICENSE"])
            .main_file("C:\\src\\bin\\tool.exe")
            .build()
            .expect("valid spec");
        let text = build_script(&spec).into_string();

        let (install, uninstall) = text
            .split_once("Section \"Uninstall\"")
            .expect("uninstall section present");

        let staged = [
            "File \"C:\\src\\bin\\tool.exe\"",
            "File \"assets/data/config.ini\"",
            "File \"LICENSE\"",
        ];
        let removed = [
            "Delete \"$INSTDIR\\tool.exe\"",
            "Delete \"$INSTDIR\\config.ini\"",
            "Delete \"$INSTDIR\\LICENSE\"",
        ];

        let staged_at: Vec<_> = staged.iter().map(|s| position(install, s)).collect();
        let removed_at: Vec<_> = removed.iter().map(|s| position(uninstall, s)).collect();
        assert!(staged_at.windows(2).all(|w| w[0] < w[1]));
        assert!(removed_at.windows(2).all(|w| w[0] < w[1]));

        assert!(!install.contains("File \"$INSTDIR"));
        assert!(!uninstall.contains("assets/data"));
        assert!(!uninstall.contains("C:\\src"));
    }

    #[test]
    fn shortcuts_target_main_file_base_name() {
        let spec = InstallSpecBuilder::new()
            .program_name("Demo")
            .install_dir("C:\\Apps\\Demo")
            .files(["docs/readme.txt", "target/release/demo.exe"])
            .main_file("target/release/demo.exe")
            .build()
            .expect("valid spec");
        let text = build_script(&spec).into_string();

        let shortcuts: Vec<_> = text
            .lines()
            .filter(|l| l.trim_start().starts_with("CreateShortcut"))
            .collect();
        assert_eq!(shortcuts.len(), 3);
        assert!(shortcuts[0].contains("\"$INSTDIR\\demo.exe\""));
        assert!(shortcuts[1].contains("\"$INSTDIR\\demo.exe\""));
        assert!(shortcuts[2].ends_with("\"$INSTDIR\\uninstall.exe\""));
        assert!(!text.contains("target/release/demo.exe\" \"\""));
    }

    #[test]
    fn empty_icon_keeps_define_but_drops_icon_references() {
        let spec = InstallSpecBuilder::new()
            .program_name("Demo")
            .install_dir("C:\\Apps\\Demo")
            .files(["demo.exe"])
            .main_file("demo.exe")
            .build()
            .expect("valid spec");
        let text = build_script(&spec).into_string();

        assert!(text.contains("!define ICON \"\"\n"));
        assert!(!text.contains("Icon \""));
        assert!(!text.contains("${ICON}"));
        assert!(text.contains(
            "CreateShortcut \"$DESKTOP\\${APP_NAME}.lnk\" \"$INSTDIR\\demo.exe\"\n"
        ));
    }

    #[test]
    fn options_change_out_file_and_uninstall_label() {
        let spec = demo_spec();
        let text = ScriptBuilder::new(&spec)
            .options(ScriptOptions {
                out_file: "dist/demo-setup.exe".into(),
                uninstall_label: "Désinstaller".into(),
            })
            .build()
            .into_string();

        assert!(text.contains("OutFile \"dist/demo-setup.exe\"\n"));
        assert_eq!(text.matches("\\Désinstaller.lnk\"").count(), 2);
    }

    #[test]
    fn builds_concurrently() {
        let spec = demo_spec();
        let expected = build_script(&spec);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| build_script(&spec)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().expect("thread panicked"), expected);
            }
        });
    }
}
