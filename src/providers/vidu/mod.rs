//! Vidu Provider Module
//!
//! Video generation through the Vidu V2 enterprise API: text-to-video,
//! image-to-video, and reference-to-video, with label-based resolution and
//! aspect-ratio selection.

pub mod client;
pub mod config;

pub use client::ViduClient;
pub use config::ViduConfig;
