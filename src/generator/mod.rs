//! Installer script generation.
//!
//! Turns validated installer metadata into an NSIS script. The pipeline is:
//!
//! 1. Collect raw values in an [`InstallSpecBuilder`]
//! 2. Validate them ([`validate`]) and freeze them into an [`InstallSpec`]
//! 3. Render the script with [`ScriptBuilder`]
//! 4. Optionally write it with [`write_script`]
//!
//! Steps 1 to 3 are pure and may run on any number of threads at once.
//!
//! # Example
//!
//! ```
//! use mynsis::generator::{InstallSpecBuilder, ScriptOptions, generate};
//!
//! let builder = InstallSpecBuilder::new()
//!     .program_name("Demo")
//!     .install_dir("C:\\Apps\\Demo")
//!     .icon_path("icons/app.ico")
//!     .files(["build/demo.exe", "build/readme.txt"])
//!     .main_file("build/demo.exe");
//!
//! let script = generate(builder, ScriptOptions::default())?;
//! assert!(script.as_str().starts_with("!define APP_NAME \"Demo\"\n"));
//! # Ok::<(), mynsis::generator::Error>(())
//! ```

pub mod error;
pub mod nsis;
pub mod spec;

pub use error::{Error, Result};
pub use nsis::{
    DEFAULT_OUT_FILE, GeneratedScript, ScriptBuilder, ScriptOptions, build_script, write_script,
};
pub use spec::{
    InstallSpec, InstallSpecBuilder, SpecField, SpecFormat, ValidationError, load_spec_file,
    validate,
};

/// Validate `builder` and render the script.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the spec is rejected; the script
/// builder is not invoked in that case.
pub fn generate(builder: InstallSpecBuilder, options: ScriptOptions) -> Result<GeneratedScript> {
    let spec = builder.build()?;
    Ok(ScriptBuilder::new(&spec).options(options).build())
}
