//! Size value type and catalog label enums
//!
//! `VideoSize` is a plain value: two positive pixel dimensions, compared by
//! equality and by derived aspect ratio. Its `Display`/`FromStr` pair is the
//! canonical wire form `"{width}*{height}"` that several vendor APIs consume
//! verbatim (vendors with other conventions convert in their own client).

use crate::error::VideoGenError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A video size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl VideoSize {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width divided by height)
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl std::fmt::Display for VideoSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*{}", self.width, self.height)
    }
}

impl FromStr for VideoSize {
    type Err = VideoGenError;

    /// Parse the canonical `"{width}*{height}"` form.
    ///
    /// Fails when the string does not contain exactly one `*` separator or
    /// either half is not a positive integer. Never coerces malformed input
    /// to a default size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('*');
        let (width, height) = match (parts.next(), parts.next(), parts.next()) {
            (Some(w), Some(h), None) => (w, h),
            _ => {
                return Err(VideoGenError::ParseError(format!(
                    "Invalid size string: {s:?} (expected \"width*height\")"
                )));
            }
        };

        let width: u32 = width.parse().map_err(|_| {
            VideoGenError::ParseError(format!("Invalid size string: {s:?} (bad width)"))
        })?;
        let height: u32 = height.parse().map_err(|_| {
            VideoGenError::ParseError(format!("Invalid size string: {s:?} (bad height)"))
        })?;

        if width == 0 || height == 0 {
            return Err(VideoGenError::ParseError(format!(
                "Invalid size string: {s:?} (dimensions must be positive)"
            )));
        }

        Ok(Self { width, height })
    }
}

impl From<(u32, u32)> for VideoSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<VideoSize> for (u32, u32) {
    fn from(size: VideoSize) -> Self {
        (size.width, size.height)
    }
}

/// Aspect ratio label used to organize vendor size catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9
    Landscape,
    /// 9:16
    Portrait,
    /// 1:1
    Square,
}

impl AspectRatio {
    /// The label the vendor APIs use
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Square => "1:1",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = VideoGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "16:9" => Ok(Self::Landscape),
            "9:16" => Ok(Self::Portrait),
            "1:1" => Ok(Self::Square),
            other => Err(VideoGenError::ParseError(format!(
                "Unknown aspect ratio label: {other:?}"
            ))),
        }
    }
}

/// Resolution tier label used to organize vendor size catalogs
///
/// An informal grouping internal to each provider; not every provider uses
/// every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Vidu base resolution ("512")
    Base512,
    /// 480p
    P480,
    /// 540p
    P540,
    /// 720p
    P720,
    /// 1080p
    P1080,
    /// 4K
    Uhd4k,
}

impl Resolution {
    /// The label the vendor APIs use
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base512 => "512",
            Self::P480 => "480p",
            Self::P540 => "540p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
            Self::Uhd4k => "4k",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = VideoGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "512" => Ok(Self::Base512),
            "480p" => Ok(Self::P480),
            "540p" => Ok(Self::P540),
            "720p" => Ok(Self::P720),
            "1080p" => Ok(Self::P1080),
            "4k" => Ok(Self::Uhd4k),
            other => Err(VideoGenError::ParseError(format!(
                "Unknown resolution label: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(VideoSize::new(1280, 720).to_string(), "1280*720");
        assert_eq!(VideoSize::new(3840, 2160).to_string(), "3840*2160");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "1280*720".parse::<VideoSize>().unwrap(),
            VideoSize::new(1280, 720)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_separator() {
        assert!("1280x720".parse::<VideoSize>().is_err());
        assert!("1280".parse::<VideoSize>().is_err());
        assert!("1280*720*1".parse::<VideoSize>().is_err());
    }

    #[test]
    fn test_parse_rejects_bad_integers() {
        assert!("abc*720".parse::<VideoSize>().is_err());
        assert!("1280*abc".parse::<VideoSize>().is_err());
        assert!("-100*720".parse::<VideoSize>().is_err());
        assert!("0*720".parse::<VideoSize>().is_err());
        assert!("1280*0".parse::<VideoSize>().is_err());
        assert!("".parse::<VideoSize>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for size in [
            VideoSize::new(1, 1),
            VideoSize::new(832, 480),
            VideoSize::new(1088, 832),
            VideoSize::new(2160, 3840),
        ] {
            assert_eq!(size.to_string().parse::<VideoSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_aspect_ratio_value() {
        assert!((VideoSize::new(1920, 1080).aspect_ratio() - 16.0 / 9.0).abs() < 1e-9);
        assert!((VideoSize::new(960, 960).aspect_ratio() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_round_trips() {
        for ratio in [AspectRatio::Landscape, AspectRatio::Portrait, AspectRatio::Square] {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), ratio);
        }
        for tier in [
            Resolution::Base512,
            Resolution::P480,
            Resolution::P540,
            Resolution::P720,
            Resolution::P1080,
            Resolution::Uhd4k,
        ] {
            assert_eq!(tier.as_str().parse::<Resolution>().unwrap(), tier);
        }
    }
}
