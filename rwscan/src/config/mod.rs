//! Configuration module for rwscan
//!
//! Three layers: compile-time limits and defaults in [`constants`], runtime
//! preferences read from the environment in [`runtime`], and an optional TOML
//! file merged over the environment by [`ScanConfig::from_toml_file`].

pub mod constants;
pub mod error;
pub mod runtime;

pub use error::ConfigError;
pub use runtime::{LoggingPreferences, OutputFormat, ScanConfig};
