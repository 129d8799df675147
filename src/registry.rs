//! Generator construction
//!
//! Factory surface for building a boxed [`VideoGenerationCapability`] from a
//! provider tag plus credentials, without naming concrete client types.

use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::{HttpConfig, ProviderType};

/// Credentials and overrides for constructing a provider client
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// API key for authentication
    pub api_key: String,
    /// Secondary secret; reserved for vendors with key/secret pairs
    pub api_secret: Option<String>,
    /// Model override (provider default used when absent)
    pub model: Option<String>,
    /// Base URL override (provider default used when absent)
    pub base_url: Option<String>,
    /// HTTP client configuration
    pub http: HttpConfig,
}

impl GeneratorConfig {
    /// Create a configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the secondary secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP configuration
    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }
}

#[allow(dead_code)]
fn disabled(provider: ProviderType, feature: &str) -> VideoGenError {
    VideoGenError::ConfigurationError(format!(
        "Provider {provider} support is not compiled in; enable the `{feature}` cargo feature"
    ))
}

/// Create a video generator for the given provider.
///
/// Fails with a typed error for providers without an implementation
/// (PixVerse) or whose cargo feature is disabled, and for invalid
/// configurations (empty API key).
pub fn create_generator(
    provider: ProviderType,
    config: GeneratorConfig,
) -> Result<Box<dyn VideoGenerationCapability>, VideoGenError> {
    let http_client = config.http.build_client()?;

    match provider {
        #[cfg(feature = "tongyi")]
        ProviderType::Tongyi => {
            let mut provider_config =
                crate::providers::tongyi::TongyiConfig::new(config.api_key);
            if let Some(base_url) = config.base_url {
                provider_config = provider_config.with_base_url(base_url);
            }
            if let Some(model) = config.model {
                provider_config = provider_config.with_model(model);
            }
            provider_config.validate()?;
            Ok(Box::new(crate::providers::tongyi::TongyiClient::new(
                provider_config,
                http_client,
            )))
        }
        #[cfg(not(feature = "tongyi"))]
        ProviderType::Tongyi => Err(disabled(provider, "tongyi")),

        #[cfg(feature = "vidu")]
        ProviderType::Vidu => {
            let mut provider_config = crate::providers::vidu::ViduConfig::new(config.api_key);
            if let Some(base_url) = config.base_url {
                provider_config = provider_config.with_base_url(base_url);
            }
            if let Some(model) = config.model {
                provider_config = provider_config.with_model(model);
            }
            provider_config.validate()?;
            Ok(Box::new(crate::providers::vidu::ViduClient::new(
                provider_config,
                http_client,
            )))
        }
        #[cfg(not(feature = "vidu"))]
        ProviderType::Vidu => Err(disabled(provider, "vidu")),

        #[cfg(feature = "luma")]
        ProviderType::Luma => {
            let mut provider_config = crate::providers::luma::LumaConfig::new(config.api_key);
            if let Some(base_url) = config.base_url {
                provider_config = provider_config.with_base_url(base_url);
            }
            if let Some(model) = config.model {
                provider_config = provider_config.with_model(model);
            }
            provider_config.validate()?;
            Ok(Box::new(crate::providers::luma::LumaClient::new(
                provider_config,
                http_client,
            )))
        }
        #[cfg(not(feature = "luma"))]
        ProviderType::Luma => Err(disabled(provider, "luma")),

        #[cfg(feature = "runway")]
        ProviderType::Runway => {
            let mut provider_config =
                crate::providers::runway::RunwayConfig::new(config.api_key);
            if let Some(base_url) = config.base_url {
                provider_config = provider_config.with_base_url(base_url);
            }
            if let Some(model) = config.model {
                provider_config = provider_config.with_model(model);
            }
            provider_config.validate()?;
            Ok(Box::new(crate::providers::runway::RunwayClient::new(
                provider_config,
                http_client,
            )))
        }
        #[cfg(not(feature = "runway"))]
        ProviderType::Runway => Err(disabled(provider, "runway")),

        #[cfg(feature = "siliconflow")]
        ProviderType::SiliconFlow => {
            let mut provider_config =
                crate::providers::siliconflow::SiliconFlowConfig::new(config.api_key);
            if let Some(base_url) = config.base_url {
                provider_config = provider_config.with_base_url(base_url);
            }
            if let Some(model) = config.model {
                provider_config = provider_config.with_model(model);
            }
            provider_config.validate()?;
            Ok(Box::new(
                crate::providers::siliconflow::SiliconFlowClient::new(
                    provider_config,
                    http_client,
                ),
            ))
        }
        #[cfg(not(feature = "siliconflow"))]
        ProviderType::SiliconFlow => Err(disabled(provider, "siliconflow")),

        #[cfg(feature = "zhipu")]
        ProviderType::Zhipu => {
            let mut provider_config = crate::providers::zhipu::ZhipuConfig::new(config.api_key);
            if let Some(base_url) = config.base_url {
                provider_config = provider_config.with_base_url(base_url);
            }
            if let Some(model) = config.model {
                provider_config = provider_config.with_model(model);
            }
            provider_config.validate()?;
            Ok(Box::new(crate::providers::zhipu::ZhipuClient::new(
                provider_config,
                http_client,
            )))
        }
        #[cfg(not(feature = "zhipu"))]
        ProviderType::Zhipu => Err(disabled(provider, "zhipu")),

        #[cfg(feature = "stability")]
        ProviderType::Stability => {
            let mut provider_config =
                crate::providers::stability::StabilityConfig::new(config.api_key);
            if let Some(base_url) = config.base_url {
                provider_config = provider_config.with_base_url(base_url);
            }
            provider_config.validate()?;
            Ok(Box::new(crate::providers::stability::StabilityClient::new(
                provider_config,
                http_client,
            )))
        }
        #[cfg(not(feature = "stability"))]
        ProviderType::Stability => Err(disabled(provider, "stability")),

        ProviderType::Pixverse => Err(VideoGenError::UnsupportedOperation(
            "PixVerse provider is not implemented".to_string(),
        )),
    }
}

/// Providers a generator can currently be constructed for
pub fn supported_providers() -> Vec<ProviderType> {
    crate::providers::get_supported_providers()
        .into_iter()
        .map(|info| info.provider_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "tongyi")]
    fn test_create_tongyi_generator() {
        let generator =
            create_generator(ProviderType::Tongyi, GeneratorConfig::new("key")).unwrap();
        assert_eq!(generator.provider(), ProviderType::Tongyi);
        assert!(!generator.supported_models().is_empty());
    }

    #[test]
    #[cfg(feature = "tongyi")]
    fn test_empty_api_key_rejected() {
        let err =
            create_generator(ProviderType::Tongyi, GeneratorConfig::default()).err().unwrap();
        assert!(matches!(err, VideoGenError::ConfigurationError(_)));
    }

    #[test]
    fn test_pixverse_is_unsupported() {
        let err =
            create_generator(ProviderType::Pixverse, GeneratorConfig::new("key")).err().unwrap();
        assert!(matches!(err, VideoGenError::UnsupportedOperation(_)));
    }

    #[test]
    #[cfg(feature = "all-providers")]
    fn test_supported_providers_excludes_pixverse() {
        let providers = supported_providers();
        assert_eq!(providers.len(), 7);
        assert!(!providers.contains(&ProviderType::Pixverse));
    }
}
