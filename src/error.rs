//! Error Handling Module
//!
//! This module provides comprehensive error handling for the video
//! generation library: the core `VideoGenError` type, a coarse
//! `ErrorCategory` classification, and conversions from common error types.

use thiserror::Error;

/// Main error type for the video generation library
#[derive(Error, Debug)]
pub enum VideoGenError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// API returned an error response
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
        /// Optional error details
        details: Option<serde_json::Value>,
    },

    /// Authentication failed
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// Request timed out
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// Failed to parse a response or value
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid input parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation not supported by this provider
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Provider-specific error
    #[error("Provider error ({provider}): {message}")]
    ProviderError {
        /// Provider identifier
        provider: String,
        /// Error message
        message: String,
    },
}

/// Coarse error classification for retry and presentation decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Authentication or authorization failure
    Auth,
    /// Client-side error (bad request, invalid input)
    Client,
    /// Server-side error
    Server,
    /// Network-level failure
    Network,
    /// Rate limiting
    RateLimit,
    /// Parsing or serialization failure
    Parsing,
    /// Unsupported operation or provider
    Unsupported,
    /// Anything else
    Other,
}

impl VideoGenError {
    /// Create an API error from a status code and message
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a provider-specific error
    pub fn provider_error(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Classify this error into a coarse category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AuthenticationError(_) => ErrorCategory::Auth,
            Self::RateLimitError(_) => ErrorCategory::RateLimit,
            Self::HttpError(_) | Self::TimeoutError(_) => ErrorCategory::Network,
            Self::ParseError(_) | Self::JsonError(_) => ErrorCategory::Parsing,
            Self::InvalidParameter(_) | Self::ConfigurationError(_) => ErrorCategory::Client,
            Self::UnsupportedOperation(_) => ErrorCategory::Unsupported,
            Self::ApiError { code, .. } => {
                if *code == 401 || *code == 403 {
                    ErrorCategory::Auth
                } else if *code == 429 {
                    ErrorCategory::RateLimit
                } else if *code >= 500 {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Client
                }
            }
            Self::ProviderError { .. } => ErrorCategory::Other,
        }
    }

    /// Whether retrying the same request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::RateLimit
        )
    }
}

impl From<reqwest::Error> for VideoGenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimeoutError(err.to_string())
        } else if err.is_status() {
            let code = err.status().map(|s| s.as_u16()).unwrap_or(0);
            Self::api_error(code, err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_categories() {
        assert_eq!(
            VideoGenError::api_error(401, "unauthorized").category(),
            ErrorCategory::Auth
        );
        assert_eq!(
            VideoGenError::api_error(429, "too many requests").category(),
            ErrorCategory::RateLimit
        );
        assert_eq!(
            VideoGenError::api_error(500, "internal").category(),
            ErrorCategory::Server
        );
        assert_eq!(
            VideoGenError::api_error(404, "not found").category(),
            ErrorCategory::Client
        );
    }

    #[test]
    fn test_retryable() {
        assert!(VideoGenError::api_error(503, "unavailable").is_retryable());
        assert!(VideoGenError::RateLimitError("slow down".into()).is_retryable());
        assert!(!VideoGenError::InvalidParameter("bad size".into()).is_retryable());
        assert!(!VideoGenError::ParseError("bad json".into()).is_retryable());
    }

    #[test]
    fn test_provider_error_display() {
        let e = VideoGenError::provider_error("tongyi", "task submission failed");
        assert_eq!(
            e.to_string(),
            "Provider error (tongyi): task submission failed"
        );
    }
}
