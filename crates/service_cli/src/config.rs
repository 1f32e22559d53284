//! CLI configuration management.
//!
//! Settings come from an optional TOML file (`optcli.toml` by default),
//! then environment variable overrides, then command-line flags.
//!
//! ```toml
//! steps = 2000
//! format = "table"
//! log_level = "warn"
//!
//! [implied_vol]
//! sigma_hi = 2.0
//! max_iter = 200
//! ```

use std::path::Path;

use pricer_models::implied_vol::ImpliedVolParams;
use pricer_models::lattice::TreeParams;
use serde::Deserialize;
use thiserror::Error;

/// Output rendering
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Table,
    /// One JSON document on stdout
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Default lattice steps when `--steps` is not given
    pub steps: usize,

    /// Default output format when `--format` is not given
    pub format: OutputFormat,

    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Implied volatility solver settings
    pub implied_vol: ImpliedVolParams,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            steps: TreeParams::default().steps,
            format: OutputFormat::default(),
            log_level: "warn".to_string(),
            implied_vol: ImpliedVolParams::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the file if it exists, defaults otherwise, then apply
    /// environment overrides and validate.
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        let config = config.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `OPTCLI_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`.
    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(steps) = lookup("OPTCLI_STEPS") {
            self.steps = parse_var("OPTCLI_STEPS", &steps)?;
        }

        if let Some(format) = lookup("OPTCLI_FORMAT") {
            self.format = match format.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::Parse(format!(
                        "OPTCLI_FORMAT must be table or json, got '{}'",
                        format
                    )))
                }
            };
        }

        if let Some(log_level) = lookup("OPTCLI_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(max_iter) = lookup("OPTCLI_IV_MAX_ITER") {
            self.implied_vol.max_iter = parse_var("OPTCLI_IV_MAX_ITER", &max_iter)?;
        }

        Ok(self)
    }

    /// Validate the configuration, reporting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.steps == 0 {
            errors.push("steps must be greater than 0".to_string());
        }

        if let Err(e) = self.implied_vol.validate() {
            errors.push(format!("implied_vol: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{} has an invalid value '{}'", key, value)))
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {path}: {message}")]
    Io {
        /// Path that failed to load
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Parse error in config file or environment variable
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
