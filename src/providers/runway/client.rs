//! Runway Client Implementation
//!
//! Text-to-video and image-to-video through the Runway developer API.
//! Subject-reference generation maps onto image-to-video with the reference
//! image as the prompt image.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::RunwayConfig;
use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::models::RunwayModel;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};

/// Runway video generation client
#[derive(Debug, Clone)]
pub struct RunwayClient {
    config: RunwayConfig,
    http_client: reqwest::Client,
}

fn text_to_video_url(base_url: &str) -> String {
    format!("{}/text_to_video", base_url.trim_end_matches('/'))
}

fn image_to_video_url(base_url: &str) -> String {
    format!("{}/image_to_video", base_url.trim_end_matches('/'))
}

fn task_url(base_url: &str, task_id: &str) -> String {
    format!("{}/tasks/{}", base_url.trim_end_matches('/'), task_id)
}

/// Map Runway task statuses onto the unified status
fn map_task_status(status: &str) -> TaskStatus {
    match status {
        "PENDING" => TaskStatus::Pending,
        "PROCESSING" => TaskStatus::Processing,
        "SUCCEEDED" => TaskStatus::Completed,
        "FAILED" => TaskStatus::Failed,
        other => {
            tracing::warn!(provider = "runway", status = other, "unrecognized task status");
            TaskStatus::Pending
        }
    }
}

#[derive(Debug, Serialize)]
struct TextToVideoPayload<'a> {
    model: &'a str,
    prompt_text: &'a str,
    ratio: &'a str,
    duration: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageToVideoPayload<'a> {
    model: &'a str,
    prompt_image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt_text: Option<&'a str>,
    ratio: &'a str,
    duration: u32,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    id: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    status: String,
    #[serde(default)]
    output: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

impl RunwayClient {
    /// Create a new Runway client
    pub fn new(config: RunwayConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &RunwayConfig {
        &self.config
    }

    fn request_headers(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("X-Runway-Version", RunwayConfig::API_VERSION)
    }

    async fn submit<T: Serialize>(
        &self,
        url: String,
        payload: &T,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        tracing::debug!(provider = "runway", "submitting video task");

        let response = self
            .request_headers(self.http_client.post(&url))
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "runway",
                    format!("Failed to send video generation request: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::provider_error(
                "runway",
                format!("Video generation failed with status {status}: {error_text}"),
            ));
        }

        let parsed: SubmitResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse video generation response: {e}"))
        })?;

        Ok(VideoTaskResponse {
            task_id: parsed.id,
            provider: ProviderType::Runway,
            status: TaskStatus::Pending,
            create_time: Utc::now(),
            message: parsed.status,
        })
    }
}

#[async_trait]
impl VideoGenerationCapability for RunwayClient {
    async fn text_to_video(
        &self,
        request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = TextToVideoPayload {
            model: &self.config.model,
            prompt_text: &request.prompt,
            ratio: request.aspect_ratio.as_deref().unwrap_or("16:9"),
            duration: request.duration,
        };

        self.submit(text_to_video_url(&self.config.base_url), &payload)
            .await
    }

    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = ImageToVideoPayload {
            model: &self.config.model,
            prompt_image: &request.image_url,
            prompt_text: request.prompt.as_deref(),
            ratio: request.aspect_ratio.as_deref().unwrap_or("1280:720"),
            duration: request.duration,
        };

        self.submit(image_to_video_url(&self.config.base_url), &payload)
            .await
    }

    async fn subject_reference(
        &self,
        request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = ImageToVideoPayload {
            model: &self.config.model,
            prompt_image: &request.reference_url,
            prompt_text: Some(&request.prompt),
            ratio: request.aspect_ratio.as_deref().unwrap_or("1280:720"),
            duration: request.duration,
        };

        self.submit(image_to_video_url(&self.config.base_url), &payload)
            .await
    }

    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError> {
        let url = task_url(&self.config.base_url, task_id);

        let response = self
            .request_headers(self.http_client.get(&url))
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "runway",
                    format!("Failed to query task status: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::provider_error(
                "runway",
                format!("Task query failed with status {status}: {error_text}"),
            ));
        }

        let parsed: TaskResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse task status response: {e}"))
        })?;

        let unified = map_task_status(&parsed.status);

        Ok(VideoTaskStatus {
            task_id: task_id.to_string(),
            provider: ProviderType::Runway,
            status: unified,
            progress: if unified == TaskStatus::Completed { 1.0 } else { 0.0 },
            create_time: Utc::now(),
            update_time: Utc::now(),
            video_url: parsed.output.into_iter().next(),
            thumbnail_url: None,
            error_message: parsed.error,
            estimated_time: None,
        })
    }

    fn provider(&self) -> ProviderType {
        ProviderType::Runway
    }

    fn supported_models(&self) -> Vec<String> {
        RunwayModel::ALL
            .iter()
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
