//! Provider Module
//!
//! Contains specific implementations for each video generation provider.

#[cfg(feature = "luma")]
pub mod luma;
#[cfg(feature = "runway")]
pub mod runway;
#[cfg(feature = "siliconflow")]
pub mod siliconflow;
#[cfg(feature = "stability")]
pub mod stability;
#[cfg(feature = "tongyi")]
pub mod tongyi;
#[cfg(feature = "vidu")]
pub mod vidu;
#[cfg(feature = "zhipu")]
pub mod zhipu;

// Re-export main types
#[cfg(feature = "luma")]
pub use luma::{LumaClient, LumaConfig};
#[cfg(feature = "runway")]
pub use runway::{RunwayClient, RunwayConfig};
#[cfg(feature = "siliconflow")]
pub use siliconflow::{SiliconFlowClient, SiliconFlowConfig};
#[cfg(feature = "stability")]
pub use stability::{StabilityClient, StabilityConfig};
#[cfg(feature = "tongyi")]
pub use tongyi::{TongyiClient, TongyiConfig};
#[cfg(feature = "vidu")]
pub use vidu::{ViduClient, ViduConfig};
#[cfg(feature = "zhipu")]
pub use zhipu::{ZhipuClient, ZhipuConfig};

#[cfg(feature = "luma")]
use crate::types::models::LumaModel;
#[cfg(feature = "runway")]
use crate::types::models::RunwayModel;
#[cfg(feature = "siliconflow")]
use crate::types::models::SiliconFlowModel;
#[cfg(feature = "tongyi")]
use crate::types::models::TongyiModel;
#[cfg(feature = "vidu")]
use crate::types::models::ViduModel;
use crate::types::ProviderType;

/// Provider Information
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    /// Provider type
    pub provider_type: ProviderType,
    /// Provider name
    pub name: &'static str,
    /// Description
    pub description: &'static str,
    /// Default base URL
    pub default_base_url: &'static str,
    /// Supported models
    pub supported_models: Vec<&'static str>,
}

/// Get information for all providers enabled at compile time
pub fn get_supported_providers() -> Vec<ProviderInfo> {
    #[allow(unused_mut)]
    let mut providers = Vec::new();

    #[cfg(feature = "tongyi")]
    providers.push(ProviderInfo {
        provider_type: ProviderType::Tongyi,
        name: "Tongyi Wanxiang",
        description: "Alibaba DashScope video synthesis (wanx2.1 family)",
        default_base_url: tongyi::TongyiConfig::DEFAULT_BASE_URL,
        supported_models: TongyiModel::ALL.iter().map(|m| m.as_str()).collect(),
    });

    #[cfg(feature = "vidu")]
    providers.push(ProviderInfo {
        provider_type: ProviderType::Vidu,
        name: "Vidu",
        description: "Vidu V2 enterprise video generation API",
        default_base_url: vidu::ViduConfig::DEFAULT_BASE_URL,
        supported_models: ViduModel::ALL.iter().map(|m| m.as_str()).collect(),
    });

    #[cfg(feature = "luma")]
    providers.push(ProviderInfo {
        provider_type: ProviderType::Luma,
        name: "Luma Dream Machine",
        description: "Luma Labs Dream Machine (ray family)",
        default_base_url: luma::LumaConfig::DEFAULT_BASE_URL,
        supported_models: LumaModel::ALL.iter().map(|m| m.as_str()).collect(),
    });

    #[cfg(feature = "runway")]
    providers.push(ProviderInfo {
        provider_type: ProviderType::Runway,
        name: "Runway",
        description: "Runway developer API (gen4 family)",
        default_base_url: runway::RunwayConfig::DEFAULT_BASE_URL,
        supported_models: RunwayModel::ALL.iter().map(|m| m.as_str()).collect(),
    });

    #[cfg(feature = "siliconflow")]
    providers.push(ProviderInfo {
        provider_type: ProviderType::SiliconFlow,
        name: "SiliconFlow",
        description: "SiliconFlow-hosted Wan-AI video models",
        default_base_url: siliconflow::SiliconFlowConfig::DEFAULT_BASE_URL,
        supported_models: SiliconFlowModel::ALL.iter().map(|m| m.as_str()).collect(),
    });

    #[cfg(feature = "zhipu")]
    providers.push(ProviderInfo {
        provider_type: ProviderType::Zhipu,
        name: "Zhipu AI",
        description: "Zhipu open platform CogVideoX video generation",
        default_base_url: zhipu::ZhipuConfig::DEFAULT_BASE_URL,
        supported_models: vec![zhipu::ZhipuConfig::DEFAULT_MODEL],
    });

    #[cfg(feature = "stability")]
    providers.push(ProviderInfo {
        provider_type: ProviderType::Stability,
        name: "Stability AI",
        description: "Stable Video Diffusion image-to-video",
        default_base_url: stability::StabilityConfig::DEFAULT_BASE_URL,
        supported_models: Vec::new(),
    });

    providers
}

/// Get information for a single provider, if enabled
pub fn get_provider_info(provider_type: ProviderType) -> Option<ProviderInfo> {
    get_supported_providers()
        .into_iter()
        .find(|info| info.provider_type == provider_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "all-providers")]
    fn test_all_enabled_providers_listed() {
        let providers = get_supported_providers();
        assert_eq!(providers.len(), 7);
        // PixVerse is a known provider tag but ships no client
        assert!(get_provider_info(ProviderType::Pixverse).is_none());
    }

    #[test]
    #[cfg(feature = "tongyi")]
    fn test_provider_info_lookup() {
        let info = get_provider_info(ProviderType::Tongyi).unwrap();
        assert_eq!(info.name, "Tongyi Wanxiang");
        assert!(info.supported_models.contains(&"wanx2.1-t2v-turbo"));
    }
}
