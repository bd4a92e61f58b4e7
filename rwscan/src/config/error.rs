use crate::logging::codes::{self, Code};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::NotFound { .. } => codes::config::CONFIG_NOT_FOUND,
            ConfigError::Io { .. } => codes::file_processing::IO_ERROR,
            ConfigError::Parse(_) => codes::config::CONFIG_PARSE_ERROR,
            ConfigError::InvalidValue { .. } => codes::config::INVALID_CONFIG_VALUE,
        }
    }

    pub fn invalid_value(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
