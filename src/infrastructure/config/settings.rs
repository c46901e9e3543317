//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional.
//!
//! # Example
//!
//! ```no_run
//! use bipagem::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::report::{ReportConfig, MAX_DEFAULT_DAYS};
use crate::domain::PlatformFilter;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report defaults.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] or [`ConfigError::MissingField`] when a
    /// value fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] if the file cannot be read, plus
    /// everything [`Config::parse_toml`] can return.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "'{}' is not one of {}",
                    self.logging.format,
                    LOG_FORMATS.join(", ")
                ),
            }
            .into());
        }
        if self.report.default_days > MAX_DEFAULT_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "default_days",
                reason: format!(
                    "{} exceeds the maximum of {MAX_DEFAULT_DAYS}",
                    self.report.default_days
                ),
            }
            .into());
        }
        if let Err(e) = self.report.platform.parse::<PlatformFilter>() {
            return Err(ConfigError::InvalidValue {
                field: "platform",
                reason: e.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlatformId;
    use crate::error::Error;
    use crate::testkit::config::{MINIMAL_TOML, VALID_TOML};

    #[test]
    fn parses_full_config() {
        let config = Config::parse_toml(VALID_TOML).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.report.default_days, 14);
        assert_eq!(
            config.report.platform_filter(),
            PlatformFilter::Only(PlatformId::Shopee)
        );
        assert_eq!(config.report.seed, Some(42));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = Config::parse_toml(MINIMAL_TOML).unwrap();
        assert_eq!(config.report, ReportConfig::default());

        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_unknown_platform() {
        let result = Config::parse_toml("[report]\nplatform = \"amazon\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "platform",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "format",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_level() {
        let result = Config::parse_toml("[logging]\nlevel = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "level" }))
        ));
    }

    #[test]
    fn rejects_oversized_window() {
        let result = Config::parse_toml("[report]\ndefault_days = 1000\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "default_days",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::parse_toml("[report\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn toml_round_trip_preserves_values() {
        let config = Config::parse_toml(VALID_TOML).unwrap();
        let rendered = config.to_toml().unwrap();
        assert_eq!(Config::parse_toml(&rendered).unwrap(), config);
    }
}
