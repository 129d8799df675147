//! Video Generation Capability
//!
//! Trait definition for the unified video generation surface. Video
//! generation is an asynchronous task-based operation everywhere:
//!
//! 1. Submit a generation task (text, image, or subject reference)
//! 2. Poll the task status until it reaches a terminal state
//! 3. Fetch the generated video from the returned URL

use crate::error::VideoGenError;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};
use async_trait::async_trait;

/// Video generation capability trait
///
/// Implemented by every provider client. Not every provider supports every
/// operation; unsupported operations return
/// [`VideoGenError::UnsupportedOperation`] without performing any I/O.
///
/// # Example
///
/// ```ignore
/// use vidmai::prelude::*;
///
/// let request = TextToVideoRequest::new("A cat playing piano")
///     .with_size(1280, 720)
///     .with_duration(5);
///
/// let response = generator.text_to_video(request).await?;
/// println!("Task ID: {}", response.task_id);
/// ```
#[async_trait]
pub trait VideoGenerationCapability: Send + Sync {
    /// Submit a text-to-video generation task
    async fn text_to_video(
        &self,
        request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError>;

    /// Submit an image-to-video generation task
    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError>;

    /// Submit a subject-reference generation task
    async fn subject_reference(
        &self,
        request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError>;

    /// Query the status of a previously submitted task
    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError>;

    /// The provider this generator talks to
    fn provider(&self) -> ProviderType;

    /// Model identifiers this provider is known to accept
    ///
    /// Informational; passing a model outside this list is not an error
    /// (vendors ship new models faster than catalogs update).
    fn supported_models(&self) -> Vec<String>;
}
