//! Runtime configuration.
//!
//! Sources, highest priority first:
//! 1. CLI flags (`--data-dir`)
//! 2. Environment variables (`RFX_STUDIO_DATA_DIR`, `RFX_STUDIO_LOG_FORMAT`)
//! 3. A `.env` file in the working directory
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const DATA_DIR_VAR: &str = "RFX_STUDIO_DATA_DIR";
pub const LOG_FORMAT_VAR: &str = "RFX_STUDIO_LOG_FORMAT";
/// Overrides the level picked from `--quiet`/`--verbose`
pub const LOG_FILTER_VAR: &str = "RFX_STUDIO_LOG";

const DEFAULT_DATA_DIR: &str = "./data";

/// How log lines are rendered on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'text' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Directory holding the SQLite library database.
    #[validate(length(min = 1))]
    pub data_dir: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from `.env` and the process environment.
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            data_dir: lookup(DATA_DIR_VAR).unwrap_or(defaults.data_dir),
            log_format: match lookup(LOG_FORMAT_VAR) {
                Some(raw) => raw.parse()?,
                None => defaults.log_format,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply a `--data-dir` override.
    pub fn with_data_dir(mut self, data_dir: Option<String>) -> Result<Self, AppError> {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
            self.validate()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_dir, "./data");
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/tmp/rfx"),
            (LOG_FORMAT_VAR, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, "/tmp/rfx");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(AppConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(DATA_DIR_VAR, "")])).is_err());
    }

    #[test]
    fn test_cli_override() {
        let config = AppConfig::default()
            .with_data_dir(Some("elsewhere".to_string()))
            .unwrap();
        assert_eq!(config.data_dir, "elsewhere");

        assert!(AppConfig::default().with_data_dir(Some(String::new())).is_err());
        assert_eq!(
            AppConfig::default().with_data_dir(None).unwrap().data_dir,
            "./data"
        );
    }
}
