//! User-facing labels and locale detection.

use clap::ValueEnum;

/// Labels that end up in the generated script or in CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Start-menu shortcut that runs the uninstaller (without `.lnk`).
    pub uninstall_shortcut: &'static str,

    /// Printed after the script has been written, followed by its path.
    pub script_written: &'static str,
}

const FR: Labels = Labels {
    uninstall_shortcut: "Désinstaller",
    script_written: "Le script NSIS a été généré avec succès :",
};

const EN: Labels = Labels {
    uninstall_shortcut: "Uninstall",
    script_written: "NSIS script generated successfully:",
};

/// Supported interface languages. French is the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Detects the locale from `LC_ALL`, `LC_MESSAGES` and `LANG`, in that order.
    ///
    /// The first non-empty variable decides; unknown languages fall back to
    /// [`Locale::Fr`].
    pub fn detect() -> Self {
        let value = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.is_empty());

        let locale = value.as_deref().map(Self::from_tag).unwrap_or_default();
        log::debug!("Detected locale {:?} from {:?}", locale, value);
        locale
    }

    /// Maps a POSIX locale tag such as `en_US.UTF-8` to a supported locale.
    pub fn from_tag(tag: &str) -> Self {
        let language: String = tag.chars().take(2).collect();
        match language.to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            _ => Locale::Fr,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Fr => &FR,
            Locale::En => &EN,
        }
    }
}
