//! Scan settings layered from defaults, environment and an optional TOML file

use super::constants::{defaults, env_vars};
use super::error::ConfigError;
use crate::classifier::RebalanceStrategy;
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::invalid_value(
                "output_format",
                s,
                "expected text or json",
            )),
        }
    }
}

/// What to scan and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Whitespace-separated reserved word list
    pub vocabulary_path: PathBuf,

    /// Source files scanned in order, accumulating into the same sets
    pub source_paths: Vec<PathBuf>,

    pub rebalance_strategy: RebalanceStrategy,

    pub output_format: OutputFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: env::var(env_vars::VOCABULARY)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(defaults::VOCABULARY_PATH)),
            source_paths: vec![env::var(env_vars::SOURCE)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(defaults::SOURCE_PATH))],
            rebalance_strategy: env::var(env_vars::REBALANCE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            output_format: env::var(env_vars::OUTPUT_FORMAT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl ScanConfig {
    /// Parse a TOML document; absent keys keep their environment/default values
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScanConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vocabulary_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value(
                "vocabulary_path",
                "",
                "path must not be empty",
            ));
        }

        if self.source_paths.is_empty() {
            return Err(ConfigError::invalid_value(
                "source_paths",
                "[]",
                "at least one source file is required",
            ));
        }

        if let Some(empty) = self.source_paths.iter().find(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::invalid_value(
                "source_paths",
                &empty.display().to_string(),
                "path must not be empty",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to write log events to stderr at all
    pub enable_console_logging: bool,

    /// Events below this level are dropped
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::STRUCTURED_LOGS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::CONSOLE_LOGS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            min_log_level: env::var(env_vars::LOG_LEVEL)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(LogLevel::Warning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_matches!(
            "yaml".parse::<OutputFormat>(),
            Err(ConfigError::InvalidValue { .. })
        );
    }

    #[test]
    fn test_toml_overrides_selected_keys() {
        let config = ScanConfig::from_toml_str(
            r#"
            vocabulary_path = "words.txt"
            source_paths = ["A.java", "B.java"]
            rebalance_strategy = "deferred"
            "#,
        )
        .unwrap();

        assert_eq!(config.vocabulary_path, PathBuf::from("words.txt"));
        assert_eq!(
            config.source_paths,
            vec![PathBuf::from("A.java"), PathBuf::from("B.java")]
        );
        assert_eq!(config.rebalance_strategy, RebalanceStrategy::Deferred);
    }

    #[test]
    fn test_toml_rejects_unknown_strategy() {
        let result = ScanConfig::from_toml_str(r#"rebalance_strategy = "sometimes""#);
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_rejects_empty_source_list() {
        let result = ScanConfig::from_toml_str("source_paths = []");
        assert_matches!(result, Err(ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_toml_file_loading() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_format = \"json\"").unwrap();

        let config = ScanConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_toml_file() {
        let result = ScanConfig::from_toml_file(Path::new("/nonexistent/rwscan.toml"));
        assert_matches!(result, Err(ConfigError::NotFound { .. }));
    }
}
