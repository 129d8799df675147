//! Video Generation Request Types
//!
//! Unified request types for the three generation modes. Provider-specific
//! knobs (like `movement_amplitude` or `with_audio`) are optional fields on
//! the unified types; providers ignore what they do not understand.

use serde::{Deserialize, Serialize};

/// Text-to-video generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToVideoRequest {
    /// Text description of the desired video
    pub prompt: String,

    /// Description of unwanted content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    /// Requested video width in pixels
    ///
    /// Providers with a discrete size catalog adapt this to the nearest
    /// supported size (see [`crate::sizing`]).
    pub width: u32,

    /// Requested video height in pixels
    pub height: u32,

    /// Video duration in seconds
    pub duration: u32,

    /// Video frame rate
    pub fps: u32,

    /// Video style (e.g. "general", "anime")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Random seed for reproducible results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Resolution label (e.g. "720p", "1080p", "4k")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Aspect ratio label (e.g. "16:9", "9:16", "1:1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Camera/subject movement amplitude (Vidu-specific: "auto", "small",
    /// "medium", "large")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_amplitude: Option<String>,

    /// Whether the video should loop seamlessly (Luma-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_video: Option<bool>,

    /// Generation quality mode (Zhipu-specific: "speed" or "quality")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    /// Whether to generate an audio track (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_audio: Option<bool>,

    /// Caller-side unique request identifier (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// End-user identifier (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl TextToVideoRequest {
    /// Create a request with the given prompt and default parameters
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: None,
            width: 1024,
            height: 576,
            duration: 4,
            fps: 8,
            style: None,
            seed: None,
            resolution: None,
            aspect_ratio: None,
            movement_amplitude: None,
            loop_video: None,
            quality: None,
            with_audio: None,
            request_id: None,
            user_id: None,
        }
    }

    /// Set the requested pixel dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the negative prompt
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    /// Set the duration in seconds
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set the style
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the resolution label
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    /// Set the aspect ratio label
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    /// Set the movement amplitude
    pub fn with_movement_amplitude(mut self, amplitude: impl Into<String>) -> Self {
        self.movement_amplitude = Some(amplitude.into());
        self
    }

    /// Request a seamlessly looping video
    pub fn with_loop(mut self, loop_video: bool) -> Self {
        self.loop_video = Some(loop_video);
        self
    }

    /// Set the quality mode
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    /// Request an audio track
    pub fn with_audio(mut self, with_audio: bool) -> Self {
        self.with_audio = Some(with_audio);
        self
    }
}

/// Image-to-video generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageToVideoRequest {
    /// URL of the input image
    pub image_url: String,

    /// Optional text description guiding the animation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Description of unwanted content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    /// Requested video width in pixels
    pub width: u32,

    /// Requested video height in pixels
    pub height: u32,

    /// Video duration in seconds
    pub duration: u32,

    /// Video frame rate
    pub fps: u32,

    /// Motion strength in `0.0..=1.0`
    pub motion_strength: f32,

    /// Random seed for reproducible results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Resolution label (e.g. "720p", "1080p")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Aspect ratio label (e.g. "16:9", "9:16", "1:1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Camera/subject movement amplitude (Vidu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_amplitude: Option<String>,

    /// Whether the video should loop seamlessly (Luma-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_video: Option<bool>,

    /// Generation quality mode (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    /// Whether to generate an audio track (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_audio: Option<bool>,

    /// Caller-side unique request identifier (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// End-user identifier (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ImageToVideoRequest {
    /// Create a request from an input image URL with default parameters
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            prompt: None,
            negative_prompt: None,
            width: 1024,
            height: 576,
            duration: 4,
            fps: 8,
            motion_strength: 1.0,
            seed: None,
            resolution: None,
            aspect_ratio: None,
            movement_amplitude: None,
            loop_video: None,
            quality: None,
            with_audio: None,
            request_id: None,
            user_id: None,
        }
    }

    /// Set the guiding prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Set the requested pixel dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the duration in seconds
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the motion strength
    pub fn with_motion_strength(mut self, motion_strength: f32) -> Self {
        self.motion_strength = motion_strength;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the resolution label
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    /// Set the aspect ratio label
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    /// Set the movement amplitude
    pub fn with_movement_amplitude(mut self, amplitude: impl Into<String>) -> Self {
        self.movement_amplitude = Some(amplitude.into());
        self
    }
}

/// Subject-reference video generation request
///
/// Generates a video whose subject follows a reference image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectReferenceRequest {
    /// URL of the reference image
    pub reference_url: String,

    /// Text description of the desired video
    pub prompt: String,

    /// Description of unwanted content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    /// Requested video width in pixels
    pub width: u32,

    /// Requested video height in pixels
    pub height: u32,

    /// Video duration in seconds
    pub duration: u32,

    /// Video frame rate
    pub fps: u32,

    /// How strongly the reference constrains generation, `0.0..=1.0`
    pub reference_strength: f32,

    /// Random seed for reproducible results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Resolution label (e.g. "720p", "1080p")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Aspect ratio label (e.g. "16:9", "9:16", "1:1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Camera/subject movement amplitude (Vidu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_amplitude: Option<String>,

    /// Whether the video should loop seamlessly (Luma-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_video: Option<bool>,

    /// Generation quality mode (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    /// Whether to generate an audio track (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_audio: Option<bool>,

    /// Caller-side unique request identifier (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// End-user identifier (Zhipu-specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SubjectReferenceRequest {
    /// Create a request from a reference image URL and prompt
    pub fn new(reference_url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            reference_url: reference_url.into(),
            prompt: prompt.into(),
            negative_prompt: None,
            width: 1024,
            height: 576,
            duration: 4,
            fps: 8,
            reference_strength: 1.0,
            seed: None,
            resolution: None,
            aspect_ratio: None,
            movement_amplitude: None,
            loop_video: None,
            quality: None,
            with_audio: None,
            request_id: None,
            user_id: None,
        }
    }

    /// Set the requested pixel dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the duration in seconds
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the reference strength
    pub fn with_reference_strength(mut self, reference_strength: f32) -> Self {
        self.reference_strength = reference_strength;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the aspect ratio label
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_video_request_builder() {
        let req = TextToVideoRequest::new("A cat playing in a garden")
            .with_size(1280, 720)
            .with_duration(5)
            .with_style("anime")
            .with_seed(42);

        assert_eq!(req.prompt, "A cat playing in a garden");
        assert_eq!((req.width, req.height), (1280, 720));
        assert_eq!(req.duration, 5);
        assert_eq!(req.style.as_deref(), Some("anime"));
        assert_eq!(req.seed, Some(42));
        assert_eq!(req.fps, 8);
    }

    #[test]
    fn test_request_defaults() {
        let req = ImageToVideoRequest::new("https://example.com/cat.png");
        assert_eq!((req.width, req.height), (1024, 576));
        assert_eq!(req.duration, 4);
        assert!((req.motion_strength - 1.0).abs() < f32::EPSILON);
        assert!(req.prompt.is_none());
    }

    #[test]
    fn test_optional_fields_not_serialized() {
        let req = TextToVideoRequest::new("sunset");
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("negative_prompt").is_none());
        assert!(json.get("movement_amplitude").is_none());
        assert_eq!(json["prompt"], "sunset");
    }
}
