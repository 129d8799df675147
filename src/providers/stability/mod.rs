//! Stability AI Provider Module
//!
//! Image-to-video generation with Stable Video Diffusion. Text-to-video and
//! subject-reference generation are not offered by the vendor.

pub mod client;
pub mod config;

pub use client::StabilityClient;
pub use config::StabilityConfig;
