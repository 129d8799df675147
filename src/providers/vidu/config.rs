//! Vidu Configuration

use crate::error::VideoGenError;
use crate::types::models::ViduModel;
use serde::{Deserialize, Serialize};

/// Movement amplitudes the Vidu API accepts
pub const MOVEMENT_AMPLITUDES: &[&str] = &["auto", "small", "medium", "large"];

/// Styles the Vidu text-to-video API accepts
pub const STYLES: &[&str] = &["general", "anime"];

/// Movement amplitude submitted when the request does not set one
pub const DEFAULT_MOVEMENT_AMPLITUDE: &str = "auto";

/// Style submitted when the request does not set one
pub const DEFAULT_STYLE: &str = "general";

/// Vidu API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViduConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the Vidu API
    pub base_url: String,
    /// Model to submit tasks with
    pub model: String,
}

impl ViduConfig {
    /// Default base URL for the Vidu API
    pub const DEFAULT_BASE_URL: &'static str = "https://api.vidu.cn";

    /// Default model
    pub const DEFAULT_MODEL: &'static str = ViduModel::Q1.as_str();

    /// Create a new Vidu configuration
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
                "Vidu API key cannot be empty".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(VideoGenError::ConfigurationError(
                "Vidu base URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ViduConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_accepted_values() {
        assert!(MOVEMENT_AMPLITUDES.contains(&DEFAULT_MOVEMENT_AMPLITUDE));
        assert!(STYLES.contains(&DEFAULT_STYLE));
    }

    #[test]
    fn test_config_creation() {
        let config = ViduConfig::new("test-api-key");
        assert_eq!(config.api_key, "test-api-key");
        assert_eq!(config.base_url, ViduConfig::DEFAULT_BASE_URL);
        assert_eq!(config.model, "viduq1");
        assert!(config.validate().is_ok());
        assert!(ViduConfig::default().validate().is_err());
    }
}
