//! Installer metadata consumed by script generation.
//!
//! [`InstallSpecBuilder`] holds raw form values, [`validate`] checks them in a
//! fixed order, and [`InstallSpec`] is the immutable result handed to the
//! script builder. Spec files in JSON or TOML decode into the builder.

mod builder;
mod file;
mod install_spec;
mod validate;

pub use builder::InstallSpecBuilder;
pub use file::{SpecFormat, load_spec_file, parse_spec};
pub use install_spec::InstallSpec;
pub use validate::{SpecField, ValidationError, validate};
