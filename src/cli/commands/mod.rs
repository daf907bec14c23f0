//! Command execution functions.

mod generate;

pub use generate::generate;
