//! Input validation for installer metadata.

use super::InstallSpecBuilder;
use crate::generator::nsis::base_name;
use std::fmt;
use thiserror::Error;

/// Characters that cannot appear inside a quoted NSIS string literal
/// without breaking the generated line.
const FORBIDDEN_CHARS: [char; 3] = ['"', '\r', '\n'];

/// The input field a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecField {
    ProgramName,
    InstallDir,
    IconPath,
    Files,
    MainFile,
}

impl SpecField {
    /// Flag that sets this field on the command line.
    pub fn flag(self) -> &'static str {
        match self {
            SpecField::ProgramName => "--name",
            SpecField::InstallDir => "--install-dir",
            SpecField::IconPath => "--icon",
            SpecField::Files => "--file",
            SpecField::MainFile => "--main-file",
        }
    }
}

impl fmt::Display for SpecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpecField::ProgramName => "program name",
            SpecField::InstallDir => "install directory",
            SpecField::IconPath => "icon path",
            SpecField::Files => "files",
            SpecField::MainFile => "main file",
        })
    }
}

/// Rejection of an install spec. Each value names exactly one field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("program name is empty")]
    EmptyProgramName,

    #[error("install directory is empty")]
    EmptyInstallDir,

    #[error("no files to install")]
    NoFiles,

    #[error("file {value:?} has no file name")]
    NamelessFile { value: String },

    #[error("main file is not set")]
    MissingMainFile,

    #[error("main file {main_file:?} is not one of the files to install")]
    MainFileNotListed { main_file: String },

    #[error("{field} {value:?} contains a double quote or line break")]
    Unrepresentable { field: SpecField, value: String },
}

impl ValidationError {
    /// The offending field.
    pub fn field(&self) -> SpecField {
        match self {
            ValidationError::EmptyProgramName => SpecField::ProgramName,
            ValidationError::EmptyInstallDir => SpecField::InstallDir,
            ValidationError::NoFiles | ValidationError::NamelessFile { .. } => SpecField::Files,
            ValidationError::MissingMainFile | ValidationError::MainFileNotListed { .. } => {
                SpecField::MainFile
            }
            ValidationError::Unrepresentable { field, .. } => *field,
        }
    }
}

/// Checks raw installer metadata. The first failure wins, in this order:
///
/// 1. program name non-empty after trimming
/// 2. install directory non-empty after trimming
/// 3. at least one file, each with a non-blank file name
/// 4. main file set and not blank
/// 5. main file is an exact element of the file list
/// 6. no double quote or line break in program name, install directory,
///    icon path or any file (in that order)
///
/// Paths are not checked for existence.
pub fn validate(builder: &InstallSpecBuilder) -> Result<(), ValidationError> {
    if builder.program_name.trim().is_empty() {
        return Err(ValidationError::EmptyProgramName);
    }
    if builder.install_dir.trim().is_empty() {
        return Err(ValidationError::EmptyInstallDir);
    }
    if builder.files.is_empty() {
        return Err(ValidationError::NoFiles);
    }
    if let Some(file) = builder
        .files
        .iter()
        .find(|f| base_name(f).trim().is_empty())
    {
        return Err(ValidationError::NamelessFile {
            value: file.clone(),
        });
    }

    let main_file = builder
        .main_file
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .ok_or(ValidationError::MissingMainFile)?;
    if !builder.files.iter().any(|f| f == main_file) {
        return Err(ValidationError::MainFileNotListed {
            main_file: main_file.to_string(),
        });
    }

    check_representable(SpecField::ProgramName, &builder.program_name)?;
    check_representable(SpecField::InstallDir, &builder.install_dir)?;
    check_representable(SpecField::IconPath, &builder.icon_path)?;
    for file in &builder.files {
        check_representable(SpecField::Files, file)?;
    }

    Ok(())
}

fn check_representable(field: SpecField, value: &str) -> Result<(), ValidationError> {
    if value.contains(FORBIDDEN_CHARS) {
        return Err(ValidationError::Unrepresentable {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
