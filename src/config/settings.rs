//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;

/// Region used when neither the environment nor the config file names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// AWS client settings.
    #[serde(default)]
    pub aws: AwsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref region) = self.aws.region {
            if region.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "aws.region cannot be empty".to_string(),
                });
            }
        }

        if let Some(ref profile) = self.aws.profile {
            if profile.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "aws.profile cannot be empty".to_string(),
                });
            }
        }

        if let Some(ref url) = self.aws.endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Invalid aws.endpoint_url '{url}'. Must start with http:// or https://"
                    ),
                });
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ),
            });
        }

        Ok(())
    }

    /// Picks the region: explicit override, then `AWS_REGION`, then the
    /// config file, then [`DEFAULT_REGION`].
    #[must_use]
    pub fn resolve_region(&self, cli: Option<&str>, env: Option<&str>) -> String {
        [cli, env, self.aws.region.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|region| !region.is_empty())
            .unwrap_or(DEFAULT_REGION)
            .to_string()
    }
}

/// AWS client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsConfig {
    /// Region for the Lambda client. `AWS_REGION` takes precedence.
    #[serde(default)]
    pub region: Option<String>,

    /// Named profile for credential resolution.
    #[serde(default)]
    pub profile: Option<String>,

    /// Endpoint override, e.g. `http://localhost:4566` for LocalStack.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
