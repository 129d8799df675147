//! Task Types
//!
//! Vendor-neutral task submission receipts and status reports. Video
//! generation is asynchronous everywhere: submit a task, then poll until a
//! terminal status.

use crate::types::ProviderType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unified task status across providers
///
/// Each vendor has its own status vocabulary; provider clients map those
/// onto this enum (unknown vendor states map to `Pending`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task created, not yet picked up
    Pending,
    /// Task is being executed
    Processing,
    /// Task finished successfully
    Completed,
    /// Task failed
    Failed,
}

impl TaskStatus {
    /// Whether this status is terminal (no further polling needed)
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Stable lowercase identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task submission receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoTaskResponse {
    /// Task ID for status polling
    pub task_id: String,
    /// Provider that accepted the task
    pub provider: ProviderType,
    /// Status at submission time
    pub status: TaskStatus,
    /// Task creation time
    pub create_time: DateTime<Utc>,
    /// Optional vendor message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Task status report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoTaskStatus {
    /// Task ID
    pub task_id: String,
    /// Provider executing the task
    pub provider: ProviderType,
    /// Current unified status
    pub status: TaskStatus,
    /// Progress in `0.0..=1.0` (coarse; most vendors only report done/not-done)
    pub progress: f32,
    /// Task creation time
    pub create_time: DateTime<Utc>,
    /// Last status update time
    pub update_time: DateTime<Utc>,
    /// Video URL (available when the task completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Thumbnail URL, when the vendor provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Error message, when the task failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Estimated remaining time in seconds, when the vendor provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
}

impl VideoTaskStatus {
    /// Check if the task reached a terminal status
    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check if the task succeeded
    pub fn is_success(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Check if the task failed
    pub fn is_failed(&self) -> bool {
        self.status == TaskStatus::Failed
    }

    /// Check if the task is still in progress
    pub fn is_in_progress(&self) -> bool {
        !self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(s: TaskStatus) -> VideoTaskStatus {
        VideoTaskStatus {
            task_id: "task_123".to_string(),
            provider: ProviderType::Tongyi,
            status: s,
            progress: 0.0,
            create_time: Utc::now(),
            update_time: Utc::now(),
            video_url: None,
            thumbnail_url: None,
            error_message: None,
            estimated_time: None,
        }
    }

    #[test]
    fn test_task_status_checks() {
        let s = status(TaskStatus::Processing);
        assert!(s.is_in_progress());
        assert!(!s.is_complete());

        let s = status(TaskStatus::Completed);
        assert!(s.is_complete());
        assert!(s.is_success());
        assert!(!s.is_failed());

        let s = status(TaskStatus::Failed);
        assert!(s.is_complete());
        assert!(s.is_failed());
        assert!(!s.is_success());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TaskStatus::Pending.to_string(), "pending");
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
    }
}
