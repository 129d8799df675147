//! Tongyi Wanxiang Provider Module
//!
//! Video generation through Alibaba's DashScope asynchronous task API.
//! Supports text-to-video, image-to-video, and subject-reference generation
//! with the wanx2.1 model family. Requested sizes are adapted to the model's
//! supported set before submission (DashScope rejects sizes outside it).

pub mod client;
pub mod config;

pub use client::TongyiClient;
pub use config::TongyiConfig;
