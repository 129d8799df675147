//! SiliconFlow Provider Module
//!
//! Video generation with SiliconFlow-hosted Wan-AI models. Supports
//! text-to-video and image-to-video; subject-reference generation is not
//! offered by the vendor.

pub mod client;
pub mod config;

pub use client::SiliconFlowClient;
pub use config::SiliconFlowConfig;
