//! Core application functionality
//!
//! CLI parsing and validation, settings-file handling, and the error
//! helpers shared across the crate.

pub mod cli;
pub mod config_file;
pub mod errors;

// Re-export commonly used items
pub use cli::{BuildSettings, CliArgs};
pub use config_file::ConfigFile;
pub use errors::{FlexyContext, FlexyResult};
