//! Vidu Client Implementation
//!
//! Talks to the Vidu V2 enterprise API. Vidu takes resolution and aspect
//! ratio as labels (plus string-typed duration and seed); the catalog's
//! tier tables describe which labels each model accepts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::{ViduConfig, DEFAULT_MOVEMENT_AMPLITUDE, DEFAULT_STYLE};
use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::models::ViduModel;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};

/// Vidu video generation client
#[derive(Debug, Clone)]
pub struct ViduClient {
    config: ViduConfig,
    http_client: reqwest::Client,
}

fn text_to_video_url(base_url: &str) -> String {
    format!("{}/ent/v2/text2video", base_url.trim_end_matches('/'))
}

fn image_to_video_url(base_url: &str) -> String {
    format!("{}/vidu/ent/v2/img2video", base_url.trim_end_matches('/'))
}

fn reference_to_video_url(base_url: &str) -> String {
    format!("{}/ent/v2/reference2video", base_url.trim_end_matches('/'))
}

fn task_creations_url(base_url: &str, task_id: &str) -> String {
    format!(
        "{}/ent/v2/tasks/{}/creations",
        base_url.trim_end_matches('/'),
        task_id
    )
}

/// Map Vidu task states onto the unified status
fn map_task_status(state: &str) -> TaskStatus {
    match state {
        "pending" => TaskStatus::Pending,
        "processing" => TaskStatus::Processing,
        "success" => TaskStatus::Completed,
        "failed" => TaskStatus::Failed,
        other => {
            tracing::warn!(provider = "vidu", state = other, "unrecognized task state");
            TaskStatus::Pending
        }
    }
}

#[derive(Debug, Serialize)]
struct ViduSubmitRequest<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<Vec<&'a str>>,
    // Vidu takes duration and seed as strings
    duration: String,
    seed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    aspect_ratio: Option<&'a str>,
    resolution: &'a str,
    movement_amplitude: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    task_id: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    state: String,
    #[serde(default)]
    err_code: Option<String>,
    #[serde(default)]
    creations: Vec<Creation>,
}

#[derive(Debug, Deserialize)]
struct Creation {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    cover_url: Option<String>,
}

impl ViduClient {
    /// Create a new Vidu client
    pub fn new(config: ViduConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ViduConfig {
        &self.config
    }

    async fn submit(
        &self,
        url: String,
        payload: &ViduSubmitRequest<'_>,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        tracing::debug!(provider = "vidu", model = payload.model, "submitting video task");

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
                    "vidu",
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
                "vidu",
                format!("Video generation failed with status {status}: {error_text}"),
            ));
        }

        let parsed: SubmitResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse video generation response: {e}"))
        })?;

        let create_time = parsed
            .created_at
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        Ok(VideoTaskResponse {
            task_id: parsed.task_id,
            provider: ProviderType::Vidu,
            status: TaskStatus::Pending,
            create_time,
            message: parsed.state,
        })
    }
}

#[async_trait]
impl VideoGenerationCapability for ViduClient {
    async fn text_to_video(
        &self,
        request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = ViduSubmitRequest {
            model: &self.config.model,
            style: Some(request.style.as_deref().unwrap_or(DEFAULT_STYLE)),
            prompt: Some(&request.prompt),
            images: None,
            duration: request.duration.to_string(),
            seed: request.seed.map_or_else(|| "0".to_string(), |s| s.to_string()),
            aspect_ratio: Some(request.aspect_ratio.as_deref().unwrap_or("16:9")),
            resolution: request.resolution.as_deref().unwrap_or("1080p"),
            movement_amplitude: request.movement_amplitude.as_deref().unwrap_or(DEFAULT_MOVEMENT_AMPLITUDE),
        };

        self.submit(text_to_video_url(&self.config.base_url), &payload)
            .await
    }

    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = ViduSubmitRequest {
            model: &self.config.model,
            style: None,
            prompt: request.prompt.as_deref(),
            images: Some(vec![&request.image_url]),
            duration: request.duration.to_string(),
            seed: request.seed.map_or_else(|| "0".to_string(), |s| s.to_string()),
            aspect_ratio: None,
            resolution: request.resolution.as_deref().unwrap_or("720p"),
            movement_amplitude: request.movement_amplitude.as_deref().unwrap_or(DEFAULT_MOVEMENT_AMPLITUDE),
        };

        self.submit(image_to_video_url(&self.config.base_url), &payload)
            .await
    }

    async fn subject_reference(
        &self,
        request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = ViduSubmitRequest {
            model: &self.config.model,
            style: None,
            prompt: Some(&request.prompt),
            images: Some(vec![&request.reference_url]),
            duration: request.duration.to_string(),
            seed: request.seed.map_or_else(|| "0".to_string(), |s| s.to_string()),
            aspect_ratio: Some(request.aspect_ratio.as_deref().unwrap_or("16:9")),
            resolution: request.resolution.as_deref().unwrap_or("720p"),
            movement_amplitude: request.movement_amplitude.as_deref().unwrap_or(DEFAULT_MOVEMENT_AMPLITUDE),
        };

        self.submit(reference_to_video_url(&self.config.base_url), &payload)
            .await
    }

    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError> {
        let url = task_creations_url(&self.config.base_url, task_id);

        // The creations endpoint authenticates with a token scheme, unlike
        // submission which uses a bearer.
        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Token {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "vidu",
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
                "vidu",
                format!("Task query failed with status {status}: {error_text}"),
            ));
        }

        let parsed: QueryResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse task status response: {e}"))
        })?;

        let unified = map_task_status(&parsed.state);
        let creation = parsed.creations.into_iter().next();

        Ok(VideoTaskStatus {
            task_id: task_id.to_string(),
            provider: ProviderType::Vidu,
            status: unified,
            progress: if unified == TaskStatus::Completed { 1.0 } else { 0.0 },
            create_time: Utc::now(),
            update_time: Utc::now(),
            video_url: creation.as_ref().and_then(|c| c.url.clone()),
            thumbnail_url: creation.and_then(|c| c.cover_url),
            error_message: parsed.err_code,
            estimated_time: None,
        })
    }

    fn provider(&self) -> ProviderType {
        ProviderType::Vidu
    }

    fn supported_models(&self) -> Vec<String> {
        ViduModel::ALL
            .iter()
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            text_to_video_url("https://api.vidu.cn"),
            "https://api.vidu.cn/ent/v2/text2video"
        );
        assert_eq!(
            image_to_video_url("https://api.vidu.cn"),
            "https://api.vidu.cn/vidu/ent/v2/img2video"
        );
        assert_eq!(
            task_creations_url("https://api.vidu.cn/", "t1"),
            "https://api.vidu.cn/ent/v2/tasks/t1/creations"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(map_task_status("pending"), TaskStatus::Pending);
        assert_eq!(map_task_status("processing"), TaskStatus::Processing);
        assert_eq!(map_task_status("success"), TaskStatus::Completed);
        assert_eq!(map_task_status("failed"), TaskStatus::Failed);
        assert_eq!(map_task_status("queued?"), TaskStatus::Pending);
    }

    #[test]
    fn test_text_payload_defaults() {
        let request = TextToVideoRequest::new("a fox in the snow");
        let payload = ViduSubmitRequest {
            model: "viduq1",
            style: Some(request.style.as_deref().unwrap_or(DEFAULT_STYLE)),
            prompt: Some(&request.prompt),
            images: None,
            duration: request.duration.to_string(),
            seed: request.seed.map_or_else(|| "0".to_string(), |s| s.to_string()),
            aspect_ratio: Some(request.aspect_ratio.as_deref().unwrap_or("16:9")),
            resolution: request.resolution.as_deref().unwrap_or("1080p"),
            movement_amplitude: request.movement_amplitude.as_deref().unwrap_or(DEFAULT_MOVEMENT_AMPLITUDE),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["style"], "general");
        assert_eq!(json["duration"], "4");
        assert_eq!(json["seed"], "0");
        assert_eq!(json["aspect_ratio"], "16:9");
        assert_eq!(json["resolution"], "1080p");
        assert_eq!(json["movement_amplitude"], "auto");
        assert!(json.get("images").is_none());
    }
}
