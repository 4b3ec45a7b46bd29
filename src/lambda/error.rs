//! Error type for Lambda API calls.

use aws_sdk_lambda::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Result type for Lambda API calls.
pub type LambdaResult<T> = Result<T, LambdaError>;

/// Errors returned by the Lambda backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LambdaError {
    /// The service (or the SDK on its behalf) rejected the request.
    #[error("{message}")]
    Service {
        /// Service error code, e.g. `ResourceNotFoundException`.
        code: Option<String>,
        /// Human-readable description.
        message: String,
    },

    /// The failure carried no description at all.
    #[error("Unknown error")]
    Unknown,
}

impl LambdaError {
    /// Creates a service error from an optional code and a message.
    #[must_use]
    pub fn service(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Unknown;
        }
        Self::Service {
            code: code.map(str::to_owned),
            message,
        }
    }

    /// Converts an SDK error, preferring the service message over the
    /// SDK's own rendering of the error chain.
    pub(crate) fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        let code = err.code().map(str::to_owned);
        let message = match err.message() {
            Some(message) => message.to_owned(),
            None => DisplayErrorContext(err).to_string(),
        };
        Self::service(code.as_deref(), message)
    }

    /// Returns the service error code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => code.as_deref(),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_message_only() {
        let err = LambdaError::service(Some("TooManyRequestsException"), "Rate exceeded");
        assert_eq!(err.to_string(), "Rate exceeded");
        assert_eq!(err.code(), Some("TooManyRequestsException"));
    }

    #[test]
    fn empty_message_falls_back() {
        let err = LambdaError::service(None, "  ");
        assert_eq!(err, LambdaError::Unknown);
        assert_eq!(err.to_string(), "Unknown error");
        assert_eq!(err.code(), None);
    }
}
