//! Luma Dream Machine Client Implementation
//!
//! All generation modes go through the same `generations` endpoint;
//! image-to-video and subject-reference are expressed as a `frame0`
//! keyframe. API reference: <https://docs.lumalabs.ai/docs/video-generation>

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::LumaConfig;
use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::models::LumaModel;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};

/// Luma Dream Machine video generation client
#[derive(Debug, Clone)]
pub struct LumaClient {
    config: LumaConfig,
    http_client: reqwest::Client,
}

fn generations_url(base_url: &str) -> String {
    format!("{}/generations", base_url.trim_end_matches('/'))
}

fn generation_url(base_url: &str, task_id: &str) -> String {
    format!("{}/generations/{}", base_url.trim_end_matches('/'), task_id)
}

/// Map Dream Machine generation states onto the unified status
fn map_task_status(state: &str) -> TaskStatus {
    match state {
        "pending" => TaskStatus::Pending,
        "dreaming" => TaskStatus::Processing,
        "completed" => TaskStatus::Completed,
        "failed" => TaskStatus::Failed,
        other => {
            tracing::warn!(provider = "luma", state = other, "unrecognized generation state");
            TaskStatus::Pending
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution: Option<&'a str>,
    /// Duration with an `s` suffix, e.g. `"5s"`
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    aspect_ratio: &'a str,
    #[serde(rename = "loop")]
    loop_video: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyframes: Option<Keyframes<'a>>,
}

#[derive(Debug, Serialize)]
struct Keyframes<'a> {
    frame0: Keyframe<'a>,
}

#[derive(Debug, Serialize)]
struct Keyframe<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    id: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    assets: Option<Assets>,
    #[serde(default)]
    failure_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Assets {
    #[serde(default)]
    video: Option<String>,
}

fn parse_created_at(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

impl LumaClient {
    /// Create a new Luma client
    pub fn new(config: LumaConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &LumaConfig {
        &self.config
    }

    async fn submit(
        &self,
        payload: &GenerationRequest<'_>,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let url = generations_url(&self.config.base_url);
        tracing::debug!(provider = "luma", model = payload.model, "submitting generation");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "luma",
                    format!("Failed to send generation request: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::provider_error(
                "luma",
                format!("Generation request failed with status {status}: {error_text}"),
            ));
        }

        let parsed: GenerationResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse generation response: {e}"))
        })?;

        Ok(VideoTaskResponse {
            task_id: parsed.id,
            provider: ProviderType::Luma,
            status: TaskStatus::Pending,
            create_time: parse_created_at(parsed.created_at.as_deref()),
            message: parsed.state,
        })
    }
}

#[async_trait]
impl VideoGenerationCapability for LumaClient {
    async fn text_to_video(
        &self,
        request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = GenerationRequest {
            prompt: Some(&request.prompt),
            model: &self.config.model,
            resolution: Some(request.resolution.as_deref().unwrap_or("720p")),
            duration: Some(format!("{}s", request.duration)),
            aspect_ratio: request.aspect_ratio.as_deref().unwrap_or("16:9"),
            loop_video: request.loop_video.unwrap_or(false),
            keyframes: None,
        };

        self.submit(&payload).await
    }

    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = GenerationRequest {
            prompt: request.prompt.as_deref(),
            model: &self.config.model,
            resolution: None,
            duration: None,
            aspect_ratio: request.aspect_ratio.as_deref().unwrap_or("16:9"),
            loop_video: request.loop_video.unwrap_or(false),
            keyframes: Some(Keyframes {
                frame0: Keyframe {
                    kind: "image",
                    url: &request.image_url,
                },
            }),
        };

        self.submit(&payload).await
    }

    async fn subject_reference(
        &self,
        request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = GenerationRequest {
            prompt: Some(&request.prompt),
            model: &self.config.model,
            resolution: None,
            duration: None,
            aspect_ratio: request.aspect_ratio.as_deref().unwrap_or("16:9"),
            loop_video: request.loop_video.unwrap_or(false),
            keyframes: Some(Keyframes {
                frame0: Keyframe {
                    kind: "image",
                    url: &request.reference_url,
                },
            }),
        };

        self.submit(&payload).await
    }

    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError> {
        let url = generation_url(&self.config.base_url, task_id);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "luma",
                    format!("Failed to query generation status: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::provider_error(
                "luma",
                format!("Generation query failed with status {status}: {error_text}"),
            ));
        }

        let parsed: GenerationResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse generation response: {e}"))
        })?;

        let state = parsed.state.as_deref().unwrap_or("pending");
        let unified = map_task_status(state);

        Ok(VideoTaskStatus {
            task_id: task_id.to_string(),
            provider: ProviderType::Luma,
            status: unified,
            progress: if unified == TaskStatus::Completed { 1.0 } else { 0.0 },
            create_time: parse_created_at(parsed.created_at.as_deref()),
            update_time: Utc::now(),
            video_url: parsed.assets.and_then(|a| a.video),
            thumbnail_url: None,
            error_message: parsed.failure_reason,
            estimated_time: None,
        })
    }

    fn provider(&self) -> ProviderType {
        ProviderType::Luma
    }

    fn supported_models(&self) -> Vec<String> {
        LumaModel::ALL
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
            generations_url("https://api.lumalabs.ai/dream-machine/v1"),
            "https://api.lumalabs.ai/dream-machine/v1/generations"
        );
        assert_eq!(
            generation_url("https://api.lumalabs.ai/dream-machine/v1/", "gen_1"),
            "https://api.lumalabs.ai/dream-machine/v1/generations/gen_1"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(map_task_status("pending"), TaskStatus::Pending);
        assert_eq!(map_task_status("dreaming"), TaskStatus::Processing);
        assert_eq!(map_task_status("completed"), TaskStatus::Completed);
        assert_eq!(map_task_status("failed"), TaskStatus::Failed);
        assert_eq!(map_task_status("queued"), TaskStatus::Pending);
    }

    #[test]
    fn test_keyframe_payload_shape() {
        let payload = GenerationRequest {
            prompt: Some("make it move"),
            model: "ray-2",
            resolution: None,
            duration: None,
            aspect_ratio: "16:9",
            loop_video: false,
            keyframes: Some(Keyframes {
                frame0: Keyframe {
                    kind: "image",
                    url: "https://example.com/cat.png",
                },
            }),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["keyframes"]["frame0"]["type"], "image");
        assert_eq!(json["keyframes"]["frame0"]["url"], "https://example.com/cat.png");
        assert_eq!(json["loop"], false);
        assert!(json.get("resolution").is_none());
    }

    #[test]
    fn test_text_payload_duration_suffix() {
        let payload = GenerationRequest {
            prompt: Some("sunrise"),
            model: "ray-2",
            resolution: Some("720p"),
            duration: Some("5s".to_string()),
            aspect_ratio: "16:9",
            loop_video: false,
            keyframes: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["duration"], "5s");
        assert_eq!(json["resolution"], "720p");
    }
}
