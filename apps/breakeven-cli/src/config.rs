//! # CLI Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BREAKEVEN_*`, nested keys joined with `__`)
//! 2. Config file (`breakeven.toml`, or the path in `BREAKEVEN_CONFIG`)
//! 3. Defaults (this file)
//!
//! Command-line flags such as `--json` override the loaded values per call.

use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::EnvFilter;

use breakeven_core::TimePeriod;

use crate::render::OutputFormat;

/// Config file looked up in the working directory when `BREAKEVEN_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "breakeven.toml";

/// Environment variable holding an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "BREAKEVEN_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format when neither `--json` nor `--text` is given.
    pub output: OutputFormat,

    /// Prefix for monetary figures in text output.
    pub currency_symbol: String,

    /// Period assumed by `detailed` when `--period` is omitted.
    pub default_period: TimePeriod,

    /// `EnvFilter` directive used when `RUST_LOG` is unset. Defaults to
    /// `error` so rejections are reported once, by the `Error:` line.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            output: OutputFormat::Text,
            currency_symbol: "$".to_string(),
            default_period: TimePeriod::Month,
            log_filter: "error".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the config file and environment.
    ///
    /// A file named by `BREAKEVEN_CONFIG` must exist; the default
    /// `breakeven.toml` is optional.
    ///
    /// # Environment Variable Format
    ///
    /// - `BREAKEVEN_OUTPUT=json` -> `output = "json"`
    /// - `BREAKEVEN_CURRENCY_SYMBOL=€` -> `currency_symbol = "€"`
    /// - `BREAKEVEN_DEFAULT_PERIOD=year` -> `default_period = "year"`
    pub fn load() -> Result<Self, ConfigError> {
        let file = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => config::File::with_name(&path).required(true),
            Err(_) => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder().add_source(file).add_source(
            config::Environment::with_prefix("BREAKEVEN")
                .prefix_separator("_")
                .separator("__"),
        );

        Self::from_builder(builder)
    }

    /// Deserializes and validates whatever sources the builder holds.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: CliConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic checks the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "currency_symbol".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::InvalidValue {
            key: "log_filter".to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<CliConfig, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        CliConfig::from_builder(builder)
    }

    #[test]
    fn test_defaults_when_no_sources() {
        let config = CliConfig::from_builder(config::Config::builder()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_default_log_filter_keeps_stderr_quiet() {
        use tracing_subscriber::filter::LevelFilter;

        let filter = EnvFilter::new(&CliConfig::default().log_filter);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = from_toml(
            r#"
            output = "json"
            currency_symbol = "€"
            default_period = "year"
            "#,
        )
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_period, TimePeriod::Year);
        assert_eq!(config.log_filter, CliConfig::default().log_filter);
    }

    #[test]
    fn test_empty_currency_symbol_rejected() {
        let err = from_toml(r#"currency_symbol = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "currency_symbol"));
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let err = from_toml(r#"output = "xml""#).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
