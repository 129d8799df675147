//! Tongyi mock API round-trip tests
#![cfg(feature = "tongyi")]

use vidmai::prelude::*;
use vidmai::providers::tongyi::{TongyiClient, TongyiConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TongyiClient {
    let config = TongyiConfig::new("test-key").with_base_url(server.uri());
    TongyiClient::new(config, reqwest::Client::new())
}

#[tokio::test]
async fn text_to_video_submits_adapted_size() {
    let server = MockServer::start().await;

    // 1024x576 is 16:9; the default turbo model adapts it to 1280*720.
    Mock::given(method("POST"))
        .and(path("/services/aigc/video-generation/video-synthesis"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("X-DashScope-Async", "enable"))
        .and(body_partial_json(serde_json::json!({
            "model": "wanx2.1-t2v-turbo",
            "input": { "prompt": "A cat in a garden" },
            "parameters": { "size": "1280*720" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "request_id": "req-1",
            "output": { "task_id": "task_abc", "task_status": "PENDING" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = TextToVideoRequest::new("A cat in a garden").with_size(1024, 576);
    let response = client.text_to_video(request).await.unwrap();

    assert_eq!(response.task_id, "task_abc");
    assert_eq!(response.provider, ProviderType::Tongyi);
    assert_eq!(response.status, TaskStatus::Pending);
}

#[tokio::test]
async fn task_status_maps_succeeded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks/task_abc"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "request_id": "req-2",
            "output": {
                "task_id": "task_abc",
                "task_status": "SUCCEEDED",
                "video_url": "https://cdn.example.com/video.mp4",
                "submit_time": "2025-08-01 10:00:00.000",
                "end_time": "2025-08-01 10:01:30.000"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client.get_task_status("task_abc").await.unwrap();

    assert!(status.is_success());
    assert!((status.progress - 1.0).abs() < f32::EPSILON);
    assert_eq!(
        status.video_url.as_deref(),
        Some("https://cdn.example.com/video.mp4")
    );
    assert!(status.error_message.is_none());
}

#[tokio::test]
async fn task_status_maps_failure_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks/task_bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": {
                "task_id": "task_bad",
                "task_status": "FAILED",
                "message": "content policy violation"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client.get_task_status("task_bad").await.unwrap();

    assert!(status.is_failed());
    assert_eq!(
        status.error_message.as_deref(),
        Some("content policy violation")
    );
    assert!(status.video_url.is_none());
}

#[tokio::test]
async fn http_error_surfaces_as_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/aigc/video-generation/video-synthesis"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "invalid api key" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .text_to_video(TextToVideoRequest::new("A cat"))
        .await
        .unwrap_err();

    assert!(matches!(err, VideoGenError::ProviderError { .. }));
    assert!(err.to_string().contains("401"));
}
