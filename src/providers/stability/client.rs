//! Stability AI Client Implementation
//!
//! Stability offers image-to-video only (Stable Video Diffusion). The input
//! image is fetched and re-uploaded as multipart form data; the result
//! endpoint answers 202 while generating and 200 with the video bytes once
//! done, so a 200 means the polling URL itself is the video.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use super::config::StabilityConfig;
use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};

/// Stability AI video generation client
#[derive(Debug, Clone)]
pub struct StabilityClient {
    config: StabilityConfig,
    http_client: reqwest::Client,
}

fn image_to_video_url(base_url: &str) -> String {
    format!("{}/image-to-video", base_url.trim_end_matches('/'))
}

fn result_url(base_url: &str, task_id: &str) -> String {
    format!(
        "{}/image-to-video/result/{}",
        base_url.trim_end_matches('/'),
        task_id
    )
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

impl StabilityClient {
    /// Default classifier-free guidance scale
    const CFG_SCALE: &'static str = "1.8";
    /// Default motion bucket id
    const MOTION_BUCKET_ID: &'static str = "127";

    /// Create a new Stability client
    pub fn new(config: StabilityConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }

    /// Fetch the input image so it can be re-uploaded as form data
    async fn fetch_image(&self, image_url: &str) -> Result<Vec<u8>, VideoGenError> {
        let response = self.http_client.get(image_url).send().await.map_err(|e| {
            VideoGenError::provider_error(
                "stability",
                format!("Failed to fetch input image: {e}"),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VideoGenError::provider_error(
                "stability",
                format!("Input image fetch failed with status {status}"),
            ));
        }

        Ok(response
            .bytes()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "stability",
                    format!("Failed to read input image bytes: {e}"),
                )
            })?
            .to_vec())
    }
}

#[async_trait]
impl VideoGenerationCapability for StabilityClient {
    async fn text_to_video(
        &self,
        _request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        Err(VideoGenError::UnsupportedOperation(
            "Stability AI does not support text-to-video generation".to_string(),
        ))
    }

    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let image = self.fetch_image(&request.image_url).await?;

        let form = reqwest::multipart::Form::new()
            .part(
                "image",
                reqwest::multipart::Part::bytes(image).file_name("image.png"),
            )
            .text(
                "seed",
                request.seed.map_or_else(|| "0".to_string(), |s| s.to_string()),
            )
            .text("cfg_scale", Self::CFG_SCALE)
            .text("motion_bucket_id", Self::MOTION_BUCKET_ID);

        let url = image_to_video_url(&self.config.base_url);
        tracing::debug!(provider = "stability", "submitting image-to-video task");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "stability",
                    format!("Failed to send image-to-video request: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::provider_error(
                "stability",
                format!("Image-to-video failed with status {status}: {error_text}"),
            ));
        }

        let parsed: SubmitResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse image-to-video response: {e}"))
        })?;

        Ok(VideoTaskResponse {
            task_id: parsed.id,
            provider: ProviderType::Stability,
            status: TaskStatus::Pending,
            create_time: Utc::now(),
            message: Some("Task created".to_string()),
        })
    }

    async fn subject_reference(
        &self,
        _request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        Err(VideoGenError::UnsupportedOperation(
            "Stability AI does not support subject-reference generation".to_string(),
        ))
    }

    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError> {
        let url = result_url(&self.config.base_url, task_id);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Accept", "video/*")
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "stability",
                    format!("Failed to query task result: {e}"),
                )
            })?;

        let base = VideoTaskStatus {
            task_id: task_id.to_string(),
            provider: ProviderType::Stability,
            status: TaskStatus::Processing,
            progress: 0.0,
            create_time: Utc::now(),
            update_time: Utc::now(),
            video_url: None,
            thumbnail_url: None,
            error_message: None,
            estimated_time: None,
        };

        match response.status().as_u16() {
            // Still generating
            202 => Ok(base),
            // Done; the result URL serves the video bytes directly
            200 => Ok(VideoTaskStatus {
                status: TaskStatus::Completed,
                progress: 1.0,
                video_url: Some(url),
                ..base
            }),
            _ => {
                let error: ErrorResponse = response.json().await.unwrap_or(ErrorResponse {
                    errors: vec!["Unknown error".to_string()],
                });
                Ok(VideoTaskStatus {
                    status: TaskStatus::Failed,
                    error_message: error.errors.into_iter().next(),
                    ..base
                })
            }
        }
    }

    fn provider(&self) -> ProviderType {
        ProviderType::Stability
    }

    fn supported_models(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            image_to_video_url("https://api.stability.ai/v2beta"),
            "https://api.stability.ai/v2beta/image-to-video"
        );
        assert_eq!(
            result_url("https://api.stability.ai/v2beta/", "job_1"),
            "https://api.stability.ai/v2beta/image-to-video/result/job_1"
        );
    }

    #[tokio::test]
    async fn test_unsupported_operations_do_no_io() {
        let client = StabilityClient::new(
            StabilityConfig::new("key"),
            reqwest::Client::new(),
        );

        let err = client
            .text_to_video(TextToVideoRequest::new("a wave"))
            .await
            .unwrap_err();
        assert!(matches!(err, VideoGenError::UnsupportedOperation(_)));

        let err = client
            .subject_reference(SubjectReferenceRequest::new(
                "https://example.com/ref.png",
                "dance",
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, VideoGenError::UnsupportedOperation(_)));
    }
}
