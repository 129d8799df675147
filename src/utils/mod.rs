//! Utility helpers

pub mod polling;

pub use polling::{wait_for_completion, PollOptions};
