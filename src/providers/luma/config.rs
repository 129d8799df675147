//! Luma Dream Machine Configuration

use crate::error::VideoGenError;
use crate::types::models::LumaModel;
use serde::{Deserialize, Serialize};

/// Luma Dream Machine API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumaConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the Dream Machine API
    pub base_url: String,
    /// Model to submit tasks with
    pub model: String,
}

impl LumaConfig {
    /// Default base URL for the Dream Machine API
    pub const DEFAULT_BASE_URL: &'static str = "https://api.lumalabs.ai/dream-machine/v1";

    /// Default model
    pub const DEFAULT_MODEL: &'static str = LumaModel::Ray2.as_str();

    /// Create a new Luma configuration
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
                "Luma API key cannot be empty".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(VideoGenError::ConfigurationError(
                "Luma base URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LumaConfig {
    fn default() -> Self {
        Self::new("")
    }
}
