//! Luma Dream Machine Provider Module
//!
//! Video generation through Luma's Dream Machine API with the ray model
//! family. Image-to-video and subject-reference generation are expressed as
//! keyframe-constrained generations.

pub mod client;
pub mod config;

pub use client::LumaClient;
pub use config::LumaConfig;
