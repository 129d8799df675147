//! Common types and enums used across the library

use crate::error::VideoGenError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Provider type enumeration
///
/// One tag per integrated video generation vendor. This is a closed set:
/// free-form provider names are rejected at the boundary rather than
/// carried around as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Tongyi Wanxiang (Alibaba DashScope)
    Tongyi,
    /// Vidu
    Vidu,
    /// PixVerse AI
    Pixverse,
    /// Stability AI
    Stability,
    /// SiliconFlow
    SiliconFlow,
    /// Runway
    Runway,
    /// Zhipu AI (CogVideoX)
    Zhipu,
    /// Luma Labs (Dream Machine)
    Luma,
}

impl ProviderType {
    /// All known providers
    pub const ALL: &'static [ProviderType] = &[
        ProviderType::Tongyi,
        ProviderType::Vidu,
        ProviderType::Pixverse,
        ProviderType::Stability,
        ProviderType::SiliconFlow,
        ProviderType::Runway,
        ProviderType::Zhipu,
        ProviderType::Luma,
    ];

    /// Stable lowercase identifier for this provider
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tongyi => "tongyi",
            Self::Vidu => "vidu",
            Self::Pixverse => "pixverse",
            Self::Stability => "stability",
            Self::SiliconFlow => "siliconflow",
            Self::Runway => "runway",
            Self::Zhipu => "zhipu",
            Self::Luma => "luma",
        }
    }

    /// Construct a ProviderType from a provider name string.
    /// Unknown names yield `None`; there is no catch-all variant.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tongyi" => Some(Self::Tongyi),
            "vidu" => Some(Self::Vidu),
            "pixverse" => Some(Self::Pixverse),
            "stability" => Some(Self::Stability),
            "siliconflow" => Some(Self::SiliconFlow),
            "runway" => Some(Self::Runway),
            "zhipu" => Some(Self::Zhipu),
            "luma" => Some(Self::Luma),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderType {
    type Err = VideoGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| VideoGenError::InvalidParameter(format!("Unknown provider: {s}")))
    }
}

/// HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Custom headers
    pub headers: HashMap<String, String>,
    /// Proxy settings
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
}

// Helper module for Duration serialization
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(crate::defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(crate::defaults::http::CONNECT_TIMEOUT),
            headers: HashMap::new(),
            proxy: None,
            user_agent: Some(crate::defaults::http::USER_AGENT.to_string()),
        }
    }
}

impl HttpConfig {
    /// Build a `reqwest::Client` from this configuration
    pub fn build_client(&self) -> Result<reqwest::Client, VideoGenError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(ref user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(ref proxy) = self.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| VideoGenError::ConfigurationError(format!("Invalid proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }
        if !self.headers.is_empty() {
            let mut headers = reqwest::header::HeaderMap::new();
            for (key, value) in &self.headers {
                let name = reqwest::header::HeaderName::from_bytes(key.as_bytes())
                    .map_err(|e| {
                        VideoGenError::ConfigurationError(format!("Invalid header name: {e}"))
                    })?;
                let value = reqwest::header::HeaderValue::from_str(value)
                    .map_err(|e| {
                        VideoGenError::ConfigurationError(format!("Invalid header value: {e}"))
                    })?;
                headers.insert(name, value);
            }
            builder = builder.default_headers(headers);
        }

        builder
            .build()
            .map_err(|e| VideoGenError::ConfigurationError(format!("Failed to build HTTP client: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_round_trip() {
        for provider in ProviderType::ALL {
            assert_eq!(ProviderType::from_name(provider.as_str()), Some(*provider));
        }
    }

    #[test]
    fn test_unknown_provider_name() {
        assert_eq!(ProviderType::from_name("sora"), None);
        assert!("sora".parse::<ProviderType>().is_err());
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(ProviderType::Tongyi.to_string(), "tongyi");
        assert_eq!(ProviderType::SiliconFlow.to_string(), "siliconflow");
    }
}
