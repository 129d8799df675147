//! Runway Configuration

use crate::error::VideoGenError;
use crate::types::models::RunwayModel;
use serde::{Deserialize, Serialize};

/// Runway API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the Runway API
    pub base_url: String,
    /// Model to submit tasks with
    pub model: String,
}

impl RunwayConfig {
    /// Default base URL for the Runway developer API
    pub const DEFAULT_BASE_URL: &'static str = "https://api.dev.runwayml.com/v1";

    /// Default model
    pub const DEFAULT_MODEL: &'static str = RunwayModel::Gen4Turbo.as_str();

    /// API version header value the client pins
    pub const API_VERSION: &'static str = "2024-11-06";

    /// Create a new Runway configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), VideoGenError> {
        if self.api_key.is_empty() {
            return Err(VideoGenError::ConfigurationError(
                "Runway API key cannot be empty".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(VideoGenError::ConfigurationError(
                "Runway base URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RunwayConfig {
    fn default() -> Self {
        Self::new("")
    }
}
