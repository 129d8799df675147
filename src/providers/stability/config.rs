//! Stability AI Configuration

use crate::error::VideoGenError;
use serde::{Deserialize, Serialize};

/// Stability AI API configuration
///
/// Stability's image-to-video endpoint is model-less; there is no model
/// field to configure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the Stability API
    pub base_url: String,
}

impl StabilityConfig {
    /// Default base URL for the Stability API
    pub const DEFAULT_BASE_URL: &'static str = "https://api.stability.ai/v2beta";

    /// Create a new Stability configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), VideoGenError> {
        if self.api_key.is_empty() {
            return Err(VideoGenError::ConfigurationError(
                "Stability API key cannot be empty".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(VideoGenError::ConfigurationError(
                "Stability base URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self::new("")
    }
}
