//! Zhipu AI Client Implementation
//!
//! CogVideoX video generation through the Zhipu open platform. All three
//! generation modes go through the same `video/generations` endpoint; sizes
//! travel as `"WxH"` strings in the `size` field.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::ZhipuConfig;
use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};

/// Zhipu AI video generation client
#[derive(Debug, Clone)]
pub struct ZhipuClient {
    config: ZhipuConfig,
    http_client: reqwest::Client,
}

fn generations_url(base_url: &str) -> String {
    format!("{}/video/generations", base_url.trim_end_matches('/'))
}

fn async_result_url(base_url: &str, task_id: &str) -> String {
    format!("{}/async-result/{}", base_url.trim_end_matches('/'), task_id)
}

/// Map Zhipu task statuses onto the unified status
fn map_task_status(status: &str) -> TaskStatus {
    match status {
        "PROCESSING" => TaskStatus::Processing,
        "SUCCESS" => TaskStatus::Completed,
        "FAIL" => TaskStatus::Failed,
        other => {
            tracing::warn!(provider = "zhipu", status = other, "unrecognized task status");
            TaskStatus::Pending
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationPayload<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    quality: &'a str,
    with_audio: bool,
    size: &'a str,
    fps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    id: String,
    task_status: String,
}

#[derive(Debug, Deserialize)]
struct AsyncResultResponse {
    task_status: String,
    #[serde(default)]
    video_result: Vec<ZhipuVideoResult>,
}

#[derive(Debug, Deserialize)]
struct ZhipuVideoResult {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    cover_image_url: Option<String>,
}

impl ZhipuClient {
    /// Create a new Zhipu client
    pub fn new(config: ZhipuConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ZhipuConfig {
        &self.config
    }

    async fn submit(
        &self,
        payload: &GenerationPayload<'_>,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let url = generations_url(&self.config.base_url);
        tracing::debug!(provider = "zhipu", model = payload.model, "submitting video task");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "zhipu",
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
                "zhipu",
                format!("Video generation failed with status {status}: {error_text}"),
            ));
        }

        let parsed: GenerationResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse video generation response: {e}"))
        })?;

        Ok(VideoTaskResponse {
            task_id: parsed.id,
            provider: ProviderType::Zhipu,
            status: map_task_status(&parsed.task_status),
            create_time: Utc::now(),
            message: Some(parsed.task_status),
        })
    }
}

#[async_trait]
impl VideoGenerationCapability for ZhipuClient {
    async fn text_to_video(
        &self,
        request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = GenerationPayload {
            model: &self.config.model,
            prompt: Some(&request.prompt),
            image_url: None,
            quality: request.quality.as_deref().unwrap_or("speed"),
            with_audio: request.with_audio.unwrap_or(false),
            size: request.resolution.as_deref().unwrap_or("1920x1080"),
            fps: if request.fps == 0 { 30 } else { request.fps },
            request_id: request.request_id.as_deref(),
            user_id: request.user_id.as_deref(),
        };

        self.submit(&payload).await
    }

    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = GenerationPayload {
            model: &self.config.model,
            prompt: request.prompt.as_deref(),
            image_url: Some(&request.image_url),
            quality: request.quality.as_deref().unwrap_or("speed"),
            with_audio: request.with_audio.unwrap_or(false),
            size: request.resolution.as_deref().unwrap_or("1920x1080"),
            fps: if request.fps == 0 { 30 } else { request.fps },
            request_id: request.request_id.as_deref(),
            user_id: request.user_id.as_deref(),
        };

        self.submit(&payload).await
    }

    async fn subject_reference(
        &self,
        request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        // The platform has no dedicated reference mode; the reference image
        // rides in as the input image.
        let payload = GenerationPayload {
            model: &self.config.model,
            prompt: Some(&request.prompt),
            image_url: Some(&request.reference_url),
            quality: request.quality.as_deref().unwrap_or("speed"),
            with_audio: request.with_audio.unwrap_or(false),
            size: request.resolution.as_deref().unwrap_or("1920x1080"),
            fps: if request.fps == 0 { 30 } else { request.fps },
            request_id: request.request_id.as_deref(),
            user_id: request.user_id.as_deref(),
        };

        self.submit(&payload).await
    }

    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError> {
        let url = async_result_url(&self.config.base_url, task_id);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "zhipu",
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
                "zhipu",
                format!("Task query failed with status {status}: {error_text}"),
            ));
        }

        let parsed: AsyncResultResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse task status response: {e}"))
        })?;

        let unified = map_task_status(&parsed.task_status);
        let result = parsed.video_result.into_iter().next();

        Ok(VideoTaskStatus {
            task_id: task_id.to_string(),
            provider: ProviderType::Zhipu,
            status: unified,
            progress: if unified == TaskStatus::Completed { 1.0 } else { 0.0 },
            create_time: Utc::now(),
            update_time: Utc::now(),
            video_url: result.as_ref().and_then(|r| r.url.clone()),
            thumbnail_url: result.and_then(|r| r.cover_image_url),
            error_message: if unified == TaskStatus::Failed {
                Some("Task failed".to_string())
            } else {
                None
            },
            estimated_time: None,
        })
    }

    fn provider(&self) -> ProviderType {
        ProviderType::Zhipu
    }

    fn supported_models(&self) -> Vec<String> {
        vec![ZhipuConfig::DEFAULT_MODEL.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            generations_url("https://open.bigmodel.cn/api/paas/v4"),
            "https://open.bigmodel.cn/api/paas/v4/video/generations"
        );
        assert_eq!(
            async_result_url("https://open.bigmodel.cn/api/paas/v4", "42"),
            "https://open.bigmodel.cn/api/paas/v4/async-result/42"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(map_task_status("PROCESSING"), TaskStatus::Processing);
        assert_eq!(map_task_status("SUCCESS"), TaskStatus::Completed);
        assert_eq!(map_task_status("FAIL"), TaskStatus::Failed);
        assert_eq!(map_task_status("QUEUED"), TaskStatus::Pending);
    }

    #[test]
    fn test_payload_defaults() {
        let request = TextToVideoRequest::new("city timelapse");
        let payload = GenerationPayload {
            model: "cogvideox",
            prompt: Some(&request.prompt),
            image_url: None,
            quality: request.quality.as_deref().unwrap_or("speed"),
            with_audio: request.with_audio.unwrap_or(false),
            size: request.resolution.as_deref().unwrap_or("1920x1080"),
            fps: if request.fps == 0 { 30 } else { request.fps },
            request_id: None,
            user_id: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["quality"], "speed");
        assert_eq!(json["with_audio"], false);
        assert_eq!(json["size"], "1920x1080");
        assert_eq!(json["fps"], 8);
        assert!(json.get("image_url").is_none());
    }
}
