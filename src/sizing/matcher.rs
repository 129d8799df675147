//! Nearest-size matching
//!
//! Finds the vendor-supported size whose aspect ratio is closest to the
//! requested one. Matching is on aspect ratio only — absolute pixel count is
//! deliberately ignored, so two candidates with the same ratio are
//! indistinguishable and the first one in catalog order wins. Vendor clients
//! depend on the selections this produces for the current tables; keep the
//! comparison and iteration order stable.

use crate::error::VideoGenError;
use crate::sizing::catalog::{builtin_catalog, SizeCatalog};
use crate::sizing::size::VideoSize;
use crate::types::ProviderType;

/// Outcome of a size match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMatch {
    /// A catalog entry was selected for the requested size
    Matched(VideoSize),
    /// The provider has no catalog data; the requested size passes through
    /// unchanged. The vendor may still reject it.
    Passthrough(VideoSize),
}

impl SizeMatch {
    /// The selected size, whichever way it was produced
    pub const fn size(&self) -> VideoSize {
        match self {
            Self::Matched(size) | Self::Passthrough(size) => *size,
        }
    }

    /// Whether the size was actually adapted against catalog data
    pub const fn was_adapted(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Candidate with the smallest absolute aspect-ratio difference to `target`.
///
/// Ties keep the earliest candidate (strict `<` comparison), so catalog
/// order decides. Returns `None` only for an empty candidate set.
pub fn closest_by_ratio(target: VideoSize, candidates: &[VideoSize]) -> Option<VideoSize> {
    let target_ratio = target.aspect_ratio();

    let mut closest: Option<VideoSize> = None;
    let mut min_diff = f64::INFINITY;

    for candidate in candidates {
        let diff = (candidate.aspect_ratio() - target_ratio).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = Some(*candidate);
        }
    }

    closest
}

/// Match a requested size against a catalog.
///
/// Validates the input dimensions, resolves the candidate set for
/// `(provider, model)`, and returns either the closest supported size or a
/// passthrough when the provider has no data.
pub fn match_size(
    catalog: &SizeCatalog,
    width: u32,
    height: u32,
    provider: ProviderType,
    model: Option<&str>,
) -> Result<SizeMatch, VideoGenError> {
    if width == 0 || height == 0 {
        return Err(VideoGenError::InvalidParameter(format!(
            "Video dimensions must be positive, got {width}x{height}"
        )));
    }

    let requested = VideoSize::new(width, height);
    let candidates = catalog.supported_sizes(provider, model);

    match closest_by_ratio(requested, candidates) {
        Some(size) => {
            tracing::debug!(
                provider = %provider,
                requested = %requested,
                selected = %size,
                "adapted requested size to vendor catalog"
            );
            Ok(SizeMatch::Matched(size))
        }
        None => {
            tracing::debug!(
                provider = %provider,
                requested = %requested,
                "no size catalog for provider, passing size through"
            );
            Ok(SizeMatch::Passthrough(requested))
        }
    }
}

/// Adapt a requested size to the nearest size the provider supports.
///
/// Convenience entry point over the builtin catalog. Permissive on missing
/// catalog data: the requested size is returned unchanged (use
/// [`match_size`] to distinguish that case). Zero dimensions are rejected.
pub fn adapt_size(
    width: u32,
    height: u32,
    provider: ProviderType,
    model: Option<&str>,
) -> Result<VideoSize, VideoGenError> {
    match_size(builtin_catalog(), width, height, provider, model).map(|m| m.size())
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn sz(width: u32, height: u32) -> VideoSize {
        VideoSize::new(width, height)
    }

    #[test]
    fn test_exact_match_wins() {
        let candidates = [sz(1280, 720), sz(960, 960), sz(720, 1280)];
        assert_eq!(
            closest_by_ratio(sz(960, 960), &candidates),
            Some(sz(960, 960))
        );
    }

    #[test]
    fn test_closest_ratio_scenario() {
        // Requested ratio 2.0; 16:9 candidates differ by ~0.222, the
        // 832x480 candidate by ~0.267, so the first 16:9 entry wins.
        let candidates = [sz(1280, 720), sz(1920, 1080), sz(832, 480)];
        assert_eq!(
            closest_by_ratio(sz(1000, 500), &candidates),
            Some(sz(1280, 720))
        );
    }

    #[test]
    fn test_tie_break_keeps_first_inserted() {
        // Same aspect ratio, different pixel counts: first entry wins, and
        // repeated calls agree.
        let candidates = [sz(1920, 1080), sz(1280, 720)];
        for _ in 0..3 {
            assert_eq!(
                closest_by_ratio(sz(640, 360), &candidates),
                Some(sz(1920, 1080))
            );
        }
        let reversed = [sz(1280, 720), sz(1920, 1080)];
        assert_eq!(
            closest_by_ratio(sz(640, 360), &reversed),
            Some(sz(1280, 720))
        );
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(closest_by_ratio(sz(1024, 576), &[]), None);
    }

    #[test]
    fn test_match_size_passthrough_for_unknown_provider_data() {
        let catalog = SizeCatalog::new();
        let result = match_size(&catalog, 1024, 576, ProviderType::Tongyi, None).unwrap();
        assert_eq!(result, SizeMatch::Passthrough(sz(1024, 576)));
        assert!(!result.was_adapted());
        assert_eq!(result.size(), sz(1024, 576));
    }

    #[test]
    fn test_match_size_rejects_degenerate_input() {
        let catalog = SizeCatalog::builtin();
        assert!(matches!(
            match_size(&catalog, 0, 576, ProviderType::Tongyi, None),
            Err(VideoGenError::InvalidParameter(_))
        ));
        assert!(matches!(
            match_size(&catalog, 1024, 0, ProviderType::Tongyi, None),
            Err(VideoGenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_adapt_size_against_builtin_catalog() {
        // 1024x576 is 16:9, so Tongyi's default tier yields 1280x720.
        assert_eq!(
            adapt_size(1024, 576, ProviderType::Tongyi, None).unwrap(),
            sz(1280, 720)
        );
        // Portrait request resolves to the portrait entry.
        assert_eq!(
            adapt_size(576, 1024, ProviderType::Tongyi, None).unwrap(),
            sz(720, 1280)
        );
        // Zhipu has no catalog data: passthrough.
        assert_eq!(
            adapt_size(1024, 576, ProviderType::Zhipu, None).unwrap(),
            sz(1024, 576)
        );
    }

    #[test]
    fn test_adapt_size_with_synthetic_catalog() {
        let catalog = SizeCatalog::new().with_sizes(
            ProviderType::Runway,
            vec![sz(720, 720), sz(1280, 720)],
        );
        let result = match_size(&catalog, 100, 100, ProviderType::Runway, None).unwrap();
        assert_eq!(result, SizeMatch::Matched(sz(720, 720)));
    }
}
