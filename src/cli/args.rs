//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! of the arguments that are not part of the install spec itself.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::generator::{DEFAULT_OUT_FILE, SpecFormat};
use crate::locale::Locale;
use clap::Parser;
use std::path::PathBuf;

/// NSIS installer script generator
#[derive(Parser, Debug)]
#[command(
    name = "mynsis",
    version,
    about = "Generates NSIS installer scripts",
    long_about = "Generates an NSIS installer script from a program name, an install directory,
an optional icon and the list of files to install.

The install spec can come from a JSON or TOML file (--spec), from flags, or both;
flags win over the spec file, which wins over saved settings (--config).

Usage:
  mynsis --name Demo --install-dir 'C:\\Apps\\Demo' --file build/demo.exe --main-file build/demo.exe
  mynsis --spec demo.toml --output script.nsi
  mynsis --spec demo.json --icon icons/app.ico --lang en --save-config

Exit code 0 = script written, 2 = install spec rejected, 1 = any other failure."
)]
pub struct Args {
    /// Install spec file (.json or .toml)
    ///
    /// Empty values in the file do not clear saved settings; pass `--icon ""`
    /// to drop a saved icon.
    #[arg(short = 's', long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Program name
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Default installation directory (may use NSIS variables such as $PROGRAMFILES)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub install_dir: Option<String>,

    /// Program icon (.ico); an empty value clears a saved icon
    ///
    /// Shortcuts refer to it as `$INSTDIR\<icon>`, so list it with --file as
    /// a relative path.
    #[arg(short = 'i', long, value_name = "ICO")]
    pub icon: Option<String>,

    /// File to install; repeat for several files. Replaces the spec file's list.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<String>,

    /// File the shortcuts point to; must be one of the files to install
    #[arg(short = 'm', long, value_name = "PATH")]
    pub main_file: Option<String>,

    /// Where to write the script. Printed to stdout when omitted.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Installer executable name written to OutFile
    #[arg(long, value_name = "NAME", default_value = DEFAULT_OUT_FILE)]
    pub out_file: String,

    /// Language of the generated labels (detected from the environment by default)
    #[arg(short = 'l', long, value_enum)]
    pub lang: Option<Locale>,

    /// Name of the start-menu uninstall shortcut; overrides the --lang label
    #[arg(long, value_name = "LABEL")]
    pub uninstall_label: Option<String>,

    /// Saved settings file
    #[arg(short = 'c', long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Save program name, install directory and icon to the settings file
    #[arg(long)]
    pub save_config: bool,

    /// Do not prepend a UTF-8 BOM when writing to --output
    #[arg(long)]
    pub no_bom: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        let out_file = self.out_file.trim();
        if out_file.is_empty() {
            return Err("--out-file cannot be empty".to_string());
        }
        if out_file.contains(['"', '\r', '\n']) {
            return Err(format!(
                "--out-file {:?} contains a double quote or line break",
                self.out_file
            ));
        }

        if let Some(label) = &self.uninstall_label {
            if label.trim().is_empty() {
                return Err("--uninstall-label cannot be empty".to_string());
            }
            if label.contains(['"', '\r', '\n', '\\', '/']) {
                return Err(format!(
                    "--uninstall-label {:?} contains a quote, line break or path separator",
                    label
                ));
            }
        }

        if let Some(spec) = &self.spec {
            SpecFormat::from_path(spec).map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    locale: Locale,
    bom: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            locale: args.lang.unwrap_or_else(Locale::detect),
            bom: !args.no_bom,
        }
    }
}

impl RuntimeConfig {
    /// Language for script labels and messages
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether written scripts start with a UTF-8 BOM
    pub fn bom(&self) -> bool {
        self.bom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mynsis").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn repeated_file_flags_keep_order() {
        let args = parse(&["-f", "b.txt", "--file", "a.exe", "-m", "a.exe"]);
        assert_eq!(args.files, ["b.txt", "a.exe"]);
        assert_eq!(args.out_file, "installer.exe");
        assert_eq!(args.config, PathBuf::from("config.json"));
    }

    #[test]
    fn rejects_quoted_out_file() {
        let args = parse(&["--out-file", "my \"setup\".exe"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn rejects_unknown_spec_extension() {
        let args = parse(&["--spec", "demo.yaml"]);
        assert!(args.validate().unwrap_err().contains(".yaml"));
    }

    #[test]
    fn uninstall_label_must_be_a_plain_name() {
        assert!(parse(&["--uninstall-label", "Remove Demo"]).validate().is_ok());
        assert!(parse(&["--uninstall-label", " "]).validate().is_err());
        assert!(parse(&["--uninstall-label", "tools\\remove"]).validate().is_err());
        assert!(parse(&["--uninstall-label", "say \"bye\""]).validate().is_err());
    }

    #[test]
    fn explicit_language_wins_over_detection() {
        let args = parse(&["--lang", "en", "--no-bom"]);
        let config = RuntimeConfig::from(&args);
        assert_eq!(config.locale(), Locale::En);
        assert!(!config.bom());
    }
}
