//! Runway Provider Module
//!
//! Video generation through the Runway developer API with the gen4 model
//! family. The API version is pinned via the `X-Runway-Version` header.

pub mod client;
pub mod config;

pub use client::RunwayClient;
pub use config::RunwayConfig;
