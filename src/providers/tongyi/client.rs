//! Tongyi Wanxiang Client Implementation
//!
//! Submits video synthesis tasks to DashScope's asynchronous API and maps
//! the DashScope task vocabulary onto the unified task types.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::TongyiConfig;
use crate::error::VideoGenError;
use crate::sizing;
use crate::traits::VideoGenerationCapability;
use crate::types::models::TongyiModel;
use crate::types::{
    ImageToVideoRequest, ProviderType, SubjectReferenceRequest, TaskStatus, TextToVideoRequest,
    VideoTaskResponse, VideoTaskStatus,
};

/// Tongyi Wanxiang video generation client
#[derive(Debug, Clone)]
pub struct TongyiClient {
    config: TongyiConfig,
    http_client: reqwest::Client,
}

fn synthesis_url(base_url: &str) -> String {
    format!(
        "{}/services/aigc/video-generation/video-synthesis",
        base_url.trim_end_matches('/')
    )
}

fn task_url(base_url: &str, task_id: &str) -> String {
    format!("{}/tasks/{}", base_url.trim_end_matches('/'), task_id)
}

/// Map DashScope task states onto the unified status
fn map_task_status(status: &str) -> TaskStatus {
    match status {
        "PENDING" => TaskStatus::Pending,
        "RUNNING" => TaskStatus::Processing,
        "SUCCEEDED" => TaskStatus::Completed,
        "FAILED" | "CANCELED" | "UNKNOWN" => TaskStatus::Failed,
        other => {
            tracing::warn!(provider = "tongyi", status = other, "unrecognized task status");
            TaskStatus::Pending
        }
    }
}

/// DashScope timestamps come as `2025-01-01 12:00:00.000`; newer endpoints
/// use RFC 3339.
fn parse_dashscope_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    model: &'a str,
    input: SynthesisInput<'a>,
    parameters: SynthesisParameters,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    function: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ref_images_url: Option<Vec<&'a str>>,
}

#[derive(Debug, Serialize)]
struct SynthesisParameters {
    size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    motion_strength: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    obj_or_bg: Option<Vec<&'static str>>,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    output: SubmitOutput,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitOutput {
    task_id: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    output: QueryOutput,
}

#[derive(Debug, Default, Deserialize)]
struct QueryOutput {
    #[serde(default)]
    task_status: Option<String>,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    submit_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

impl TongyiClient {
    /// Create a new Tongyi client
    pub fn new(config: TongyiConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &TongyiConfig {
        &self.config
    }

    /// Adapt the requested dimensions to the nearest size the configured
    /// model supports, rendered in DashScope's `"W*H"` convention.
    fn adapted_size_string(&self, width: u32, height: u32) -> Result<String, VideoGenError> {
        let size = sizing::adapt_size(
            width,
            height,
            ProviderType::Tongyi,
            Some(&self.config.model),
        )?;
        Ok(size.to_string())
    }

    async fn submit(
        &self,
        payload: &SynthesisRequest<'_>,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let url = synthesis_url(&self.config.base_url);
        tracing::debug!(provider = "tongyi", model = payload.model, "submitting video task");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("X-DashScope-Async", "enable")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "tongyi",
                    format!("Failed to send video synthesis request: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::provider_error(
                "tongyi",
                format!("Video synthesis failed with status {status}: {error_text}"),
            ));
        }

        let parsed: SubmitResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse video synthesis response: {e}"))
        })?;

        Ok(VideoTaskResponse {
            task_id: parsed.output.task_id,
            provider: ProviderType::Tongyi,
            status: TaskStatus::Pending,
            create_time: Utc::now(),
            message: parsed.message,
        })
    }
}

#[async_trait]
impl VideoGenerationCapability for TongyiClient {
    async fn text_to_video(
        &self,
        request: TextToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let size = self.adapted_size_string(request.width, request.height)?;

        let payload = SynthesisRequest {
            model: &self.config.model,
            input: SynthesisInput {
                function: None,
                prompt: Some(&request.prompt),
                image_url: None,
                ref_images_url: None,
            },
            parameters: SynthesisParameters {
                size,
                motion_strength: None,
                obj_or_bg: None,
            },
        };

        self.submit(&payload).await
    }

    async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let size = self.adapted_size_string(request.width, request.height)?;

        let payload = SynthesisRequest {
            model: &self.config.model,
            input: SynthesisInput {
                function: None,
                prompt: request.prompt.as_deref(),
                image_url: Some(&request.image_url),
                ref_images_url: None,
            },
            parameters: SynthesisParameters {
                size,
                motion_strength: Some(request.motion_strength),
                obj_or_bg: None,
            },
        };

        self.submit(&payload).await
    }

    async fn subject_reference(
        &self,
        request: SubjectReferenceRequest,
    ) -> Result<VideoTaskResponse, VideoGenError> {
        let size = self.adapted_size_string(request.width, request.height)?;

        let payload = SynthesisRequest {
            model: &self.config.model,
            input: SynthesisInput {
                function: Some("image_reference"),
                prompt: Some(&request.prompt),
                image_url: None,
                ref_images_url: Some(vec![&request.reference_url]),
            },
            parameters: SynthesisParameters {
                size,
                motion_strength: None,
                // The reference image is the subject, not the background
                obj_or_bg: Some(vec!["obj"]),
            },
        };

        self.submit(&payload).await
    }

    async fn get_task_status(&self, task_id: &str) -> Result<VideoTaskStatus, VideoGenError> {
        let url = task_url(&self.config.base_url, task_id);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| {
                VideoGenError::provider_error(
                    "tongyi",
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
                "tongyi",
                format!("Task query failed with status {status}: {error_text}"),
            ));
        }

        let parsed: QueryResponse = response.json().await.map_err(|e| {
            VideoGenError::ParseError(format!("Failed to parse task status response: {e}"))
        })?;

        let output = parsed.output;
        let vendor_status = output.task_status.as_deref().unwrap_or("PENDING");
        let unified = map_task_status(vendor_status);

        Ok(VideoTaskStatus {
            task_id: task_id.to_string(),
            provider: ProviderType::Tongyi,
            status: unified,
            progress: if unified == TaskStatus::Completed { 1.0 } else { 0.0 },
            create_time: output
                .submit_time
                .as_deref()
                .and_then(parse_dashscope_time)
                .unwrap_or_else(Utc::now),
            update_time: output
                .end_time
                .as_deref()
                .and_then(parse_dashscope_time)
                .unwrap_or_else(Utc::now),
            video_url: output.video_url,
            thumbnail_url: None,
            error_message: if unified == TaskStatus::Failed {
                output.message
            } else {
                None
            },
            estimated_time: None,
        })
    }

    fn provider(&self) -> ProviderType {
        ProviderType::Tongyi
    }

    fn supported_models(&self) -> Vec<String> {
        TongyiModel::ALL
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
            synthesis_url("https://dashscope.aliyuncs.com/api/v1"),
            "https://dashscope.aliyuncs.com/api/v1/services/aigc/video-generation/video-synthesis"
        );
        assert_eq!(
            task_url("https://dashscope.aliyuncs.com/api/v1/", "task_42"),
            "https://dashscope.aliyuncs.com/api/v1/tasks/task_42"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(map_task_status("PENDING"), TaskStatus::Pending);
        assert_eq!(map_task_status("RUNNING"), TaskStatus::Processing);
        assert_eq!(map_task_status("SUCCEEDED"), TaskStatus::Completed);
        assert_eq!(map_task_status("FAILED"), TaskStatus::Failed);
        assert_eq!(map_task_status("CANCELED"), TaskStatus::Failed);
        assert_eq!(map_task_status("UNKNOWN"), TaskStatus::Failed);
        assert_eq!(map_task_status("something-new"), TaskStatus::Pending);
    }

    #[test]
    fn test_parse_dashscope_time() {
        assert!(parse_dashscope_time("2025-01-01 12:00:00.000").is_some());
        assert!(parse_dashscope_time("2025-01-01T12:00:00Z").is_some());
        assert!(parse_dashscope_time("yesterday").is_none());
    }

    #[test]
    fn test_text_payload_shape() {
        let payload = SynthesisRequest {
            model: "wanx2.1-t2v-turbo",
            input: SynthesisInput {
                function: None,
                prompt: Some("a cat"),
                image_url: None,
                ref_images_url: None,
            },
            parameters: SynthesisParameters {
                size: "1280*720".to_string(),
                motion_strength: None,
                obj_or_bg: None,
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "wanx2.1-t2v-turbo");
        assert_eq!(json["input"]["prompt"], "a cat");
        assert_eq!(json["parameters"]["size"], "1280*720");
        assert!(json["input"].get("image_url").is_none());
        assert!(json["parameters"].get("motion_strength").is_none());
    }

    #[test]
    fn test_subject_reference_payload_shape() {
        let payload = SynthesisRequest {
            model: "wanx2.1-vace-plus",
            input: SynthesisInput {
                function: Some("image_reference"),
                prompt: Some("dance"),
                image_url: None,
                ref_images_url: Some(vec!["https://example.com/ref.png"]),
            },
            parameters: SynthesisParameters {
                size: "1280*720".to_string(),
                motion_strength: None,
                obj_or_bg: Some(vec!["obj"]),
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["input"]["function"], "image_reference");
        assert_eq!(json["input"]["ref_images_url"][0], "https://example.com/ref.png");
        assert_eq!(json["parameters"]["obj_or_bg"][0], "obj");
    }
}
