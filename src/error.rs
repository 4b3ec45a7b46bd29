//! Error types for lambda-deployer-mcp.
//!
//! Remote failures live in [`crate::lambda::LambdaError`]; this module holds
//! the configuration errors raised at startup and the per-call tool errors
//! that the dispatcher turns into `isError` results.

use std::path::PathBuf;

use thiserror::Error;

use crate::lambda::LambdaError;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors raised while executing a single tool call.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The arguments did not match the tool's input schema.
    #[error("{0}")]
    InvalidArguments(#[source] serde_json::Error),

    /// The `code` field was not valid base64.
    #[error("invalid base64 archive: {0}")]
    InvalidArchive(#[from] base64::DecodeError),

    /// The invocation payload could not be serialised.
    #[error("failed to serialise payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// The tool result could not be serialised.
    #[error("failed to serialise result: {0}")]
    Output(#[source] serde_json::Error),

    /// The Lambda API call failed.
    #[error(transparent)]
    Lambda(#[from] LambdaError),
}

impl ToolError {
    /// Returns `true` if the call was rejected before reaching the handler body.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "invalid setting".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("invalid setting"));
    }

    #[test]
    fn lambda_error_is_transparent() {
        let error = ToolError::from(LambdaError::service(
            Some("ResourceNotFoundException"),
            "Function not found: arn:aws:lambda:us-east-1:123:function:missing",
        ));
        assert_eq!(
            error.to_string(),
            "Function not found: arn:aws:lambda:us-east-1:123:function:missing"
        );
        assert!(!error.is_validation());
    }

    #[test]
    fn invalid_arguments_is_validation() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert!(ToolError::InvalidArguments(source).is_validation());
    }
}
