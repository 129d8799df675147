//! SiliconFlow Client Implementation
//!
//! Video generation with SiliconFlow-hosted Wan-AI models. Submission and
//! status query are both POST endpoints; sizes go over the wire in
//! SiliconFlow's `"WxH"` convention (`image_size` field).
//! API reference: <https://docs.siliconflow.com/cn/api-reference/videos/videos_submit>

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::SiliconFlowConfig;
use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::models::SiliconFlowModel;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};

/// SiliconFlow video generation client
#[derive(Debug, Clone)]
pub struct SiliconFlowClient {
    config: SiliconFlowConfig,
    http_client: reqwest::Client,
}

fn submit_url(base_url: &str) -> String {
    format!("{}/video/submit", base_url.trim_end_matches('/'))
}

fn status_url(base_url: &str) -> String {
    format!("{}/video/status", base_url.trim_end_matches('/'))
}

/// Map SiliconFlow task statuses onto the unified status
fn map_task_status(status: &str) -> TaskStatus {
    match status {
        "Pending" => TaskStatus::Pending,
        "Processing" => TaskStatus::Processing,
        "Succeed" => TaskStatus::Completed,
        "Failed" => TaskStatus::Failed,
        other => {
            tracing::warn!(
                provider = "siliconflow",
                status = other,
                "unrecognized task status"
            );
            TaskStatus::Pending
        }
    }
}

#[derive(Debug, Serialize)]
struct SubmitPayload<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<&'a str>,
    image_size: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusPayload<'a> {
    request_id: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    request_id: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    results: Option<StatusResults>,
}

#[derive(Debug, Default, Deserialize)]
struct StatusResults {
    #[serde(default)]
    videos: Vec<VideoResult>,
}

#[derive(Debug, Deserialize)]
struct VideoResult {
    #[serde(default)]
    url: Option<String>,
}

impl SiliconFlowClient {
    /// Create a new SiliconFlow client
    pub fn new(config: SiliconFlowConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SiliconFlowConfig {
        &self.config
    }

    async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        url: String,
        payload: &T,
        what: &str,
    ) -> Result<R, VideoGenError> {
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
                    "siliconflow",
                    format!("Failed to send {what} request: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::provider_error(
                "siliconflow",
                format!("{what} failed with status {status}: {error_text}"),
            ));
        }

        response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse {what} response: {e}"))
        })
    }

    async fn submit(&self, payload: &SubmitPayload<'_>) -> Result<VideoTaskResponse, VideoGenError> {
        tracing::debug!(
            provider = "siliconflow",
            model = payload.model,
            "submitting video task"
        );

        let parsed: SubmitResponse = self
            .post_json(submit_url(&self.config.base_url), payload, "video submission")
            .await?;

        Ok(VideoTaskResponse {
            task_id: parsed.request_id,
            provider: ProviderType::SiliconFlow,
            status: TaskStatus::Pending,
            create_time: Utc::now(),
            message: Some("Task submitted".to_string()),
        })
    }
}

#[async_trait]
impl VideoGenerationCapability for SiliconFlowClient {
    async fn text_to_video(
        &self,
        request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = SubmitPayload {
            model: &self.config.model,
            prompt: Some(&request.prompt),
            negative_prompt: request.negative_prompt.as_deref(),
            image_size: request.resolution.as_deref().unwrap_or("1280x720"),
            image: None,
            seed: request.seed,
        };

        self.submit(&payload).await
    }

    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let payload = SubmitPayload {
            model: &self.config.model,
            prompt: request.prompt.as_deref(),
            negative_prompt: request.negative_prompt.as_deref(),
            image_size: request.resolution.as_deref().unwrap_or("1280x720"),
            image: Some(&request.image_url),
            seed: request.seed,
        };

        self.submit(&payload).await
    }

    async fn subject_reference(
        &self,
        _request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        Err(VideoGenError::UnsupportedOperation(
            "SiliconFlow does not support subject-reference generation".to_string(),
        ))
    }

    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError> {
        let payload = StatusPayload { request_id: task_id };

        let parsed: StatusResponse = self
            .post_json(status_url(&self.config.base_url), &payload, "status query")
            .await?;

        let unified = map_task_status(&parsed.status);
        let video_url = if unified == TaskStatus::Completed {
            parsed
                .results
                .and_then(|r| r.videos.into_iter().next())
                .and_then(|v| v.url)
        } else {
            None
        };

        Ok(VideoTaskStatus {
            task_id: task_id.to_string(),
            provider: ProviderType::SiliconFlow,
            status: unified,
            progress: if unified == TaskStatus::Completed { 1.0 } else { 0.0 },
            create_time: Utc::now(),
            update_time: Utc::now(),
            video_url,
            thumbnail_url: None,
            error_message: if unified == TaskStatus::Failed {
                parsed.reason
            } else {
                None
            },
            estimated_time: None,
        })
    }

    fn provider(&self) -> ProviderType {
        ProviderType::SiliconFlow
    }

    fn supported_models(&self) -> Vec<String> {
        SiliconFlowModel::ALL
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
            submit_url("https://api.ap.siliconflow.com/v1"),
            "https://api.ap.siliconflow.com/v1/video/submit"
        );
        assert_eq!(
            status_url("https://api.ap.siliconflow.com/v1/"),
            "https://api.ap.siliconflow.com/v1/video/status"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(map_task_status("Pending"), TaskStatus::Pending);
        assert_eq!(map_task_status("Processing"), TaskStatus::Processing);
        assert_eq!(map_task_status("Succeed"), TaskStatus::Completed);
        assert_eq!(map_task_status("Failed"), TaskStatus::Failed);
        assert_eq!(map_task_status("InQueue"), TaskStatus::Pending);
    }

    #[test]
    fn test_status_payload_field_name() {
        let payload = StatusPayload { request_id: "req_7" };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["requestId"], "req_7");
    }

    #[test]
    fn test_submit_payload_defaults() {
        let payload = SubmitPayload {
            model: "Wan-AI/Wan2.1-T2V-14B",
            prompt: Some("ocean waves"),
            negative_prompt: None,
            image_size: "1280x720",
            image: None,
            seed: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["image_size"], "1280x720");
        assert!(json.get("negative_prompt").is_none());
        assert!(json.get("seed").is_none());
    }
}
