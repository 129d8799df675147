//! # Vidmai - A Unified Video Generation Interface Library
//!
//! Vidmai is a unified video generation interface library for Rust,
//! supporting multiple vendors (Tongyi Wanxiang, Vidu, Luma Dream Machine,
//! Runway, SiliconFlow, Zhipu, Stability AI) behind one capability trait.
//!
#![deny(unsafe_code)]
//!
//! ## Features
//!
//! - **One surface, many vendors**: submit text-to-video, image-to-video,
//!   and subject-reference tasks through [`VideoGenerationCapability`]
//!   without depending on any vendor's request/response shape.
//! - **Size adaptation**: each vendor accepts only a discrete set of output
//!   sizes, which differs per model; the [`sizing`] module reconciles a
//!   requested `(width, height)` against those catalogs and picks the
//!   nearest supported size.
//! - **Task-based workflow**: every vendor generates asynchronously;
//!   submissions return a task id, and [`utils::wait_for_completion`] polls
//!   until a terminal status.
//! - **Graceful degradation**: unknown model strings fall back to provider
//!   defaults instead of failing, so new vendor models keep working before
//!   the catalog learns about them.
//! - **Per-provider cargo features**: each vendor client can be compiled
//!   independently; `all-providers` (the default) enables everything.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vidmai::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = create_generator(
//!         ProviderType::Tongyi,
//!         GeneratorConfig::new(std::env::var("TONGYI_API_KEY")?),
//!     )?;
//!
//!     let request = TextToVideoRequest::new("A cat playing in a sunny garden")
//!         .with_size(1024, 576)
//!         .with_duration(4);
//!
//!     let task = generator.text_to_video(request).await?;
//!     println!("Task submitted: {}", task.task_id);
//!
//!     let status =
//!         wait_for_completion(generator.as_ref(), &task.task_id, PollOptions::default())
//!             .await?;
//!     if status.is_success() {
//!         println!("Video ready: {:?}", status.video_url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Size Adaptation
//!
//! Vendors reject sizes outside their enumerated sets, so requested
//! dimensions are matched by aspect ratio against the per-model catalog:
//!
//! ```ignore
//! use vidmai::prelude::*;
//!
//! // 1024x576 is 16:9; the wanx 720P tier resolves it to 1280x720.
//! let size = adapt_size(1024, 576, ProviderType::Tongyi, None)?;
//! assert_eq!(size.to_string(), "1280*720");
//! ```

pub mod defaults;
pub mod error;
pub mod models;
pub mod providers;
pub mod registry;
pub mod sizing;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export the main surface at the crate root
pub use error::{ErrorCategory, VideoGenError};
pub use registry::{create_generator, supported_providers, GeneratorConfig};
pub use sizing::{adapt_size, SizeCatalog, SizeMatch, VideoSize};
pub use traits::VideoGenerationCapability;
pub use types::ProviderType;

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::error::{ErrorCategory, VideoGenError};
    pub use crate::registry::{create_generator, supported_providers, GeneratorConfig};
    pub use crate::sizing::{
        adapt_size, builtin_catalog, match_size, AspectRatio, Resolution, SizeCatalog,
        SizeMatch, VideoSize,
    };
    pub use crate::traits::VideoGenerationCapability;
    pub use crate::types::{
        HttpConfig, ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus,
        TextToVideoRequest, VideoTaskResponse, VideoTaskStatus,
    };
    pub use crate::utils::{wait_for_completion, PollOptions};
}
