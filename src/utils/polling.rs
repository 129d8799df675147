//! Task polling helper
//!
//! Video generation tasks complete out of band; this is the caller-side
//! sleep loop that waits for a terminal status. Poll errors surface
//! immediately — there is no retry of failed status queries.

use crate::defaults;
use crate::error::VideoGenError;
use crate::traits::VideoGenerationCapability;
use crate::types::VideoTaskStatus;
use std::time::Duration;

/// Polling behavior
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Sleep between status queries
    pub interval: Duration,
    /// Give up after this many queries
    pub max_attempts: u32,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: defaults::polling::INTERVAL,
            max_attempts: defaults::polling::MAX_ATTEMPTS,
        }
    }
}

impl PollOptions {
    /// Set the polling interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the attempt cap
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Poll a task until it reaches a terminal status.
///
/// Returns the final [`VideoTaskStatus`] (completed or failed — a failed
/// task is a successful poll, inspect `status`). Exceeding the attempt cap
/// yields a [`VideoGenError::TimeoutError`].
pub async fn wait_for_completion(
    generator: &dyn VideoGenerationCapability,
    task_id: &str,
    options: PollOptions,
) -> Result<VideoTaskStatus, VideoGenError> {
    for attempt in 0..options.max_attempts {
        let status = generator.get_task_status(task_id).await?;

        tracing::debug!(
            provider = %generator.provider(),
            task_id,
            status = %status.status,
            progress = status.progress,
            attempt,
            "polled task status"
        );

        if status.is_complete() {
            return Ok(status);
        }

        tokio::time::sleep(options.interval).await;
    }

    Err(VideoGenError::TimeoutError(format!(
        "Task {task_id} did not complete within {} polls",
        options.max_attempts
    )))
}
