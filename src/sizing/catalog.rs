//! Vendor size catalog
//!
//! Ground truth for "which sizes can provider X (optionally restricted to
//! model Y) actually produce". Every size listed here is one the target
//! vendor accepts verbatim; this is static reference data, not inferred.
//!
//! The catalog is an immutable value built once ([`SizeCatalog::builtin`]
//! for the real vendor tables, or assembled by hand for synthetic test
//! data) and passed by reference into lookups. Table order matters: the
//! matcher breaks aspect-ratio ties by first insertion, so the slices below
//! preserve the documented vendor table order exactly. Adding a vendor or
//! model must never reorder an existing table.

use crate::sizing::size::{AspectRatio, Resolution, VideoSize};
use crate::types::models::{LumaModel, RunwayModel, SiliconFlowModel, TongyiModel, ViduModel};
use crate::types::ProviderType;
use lazy_static::lazy_static;

const fn sz(width: u32, height: u32) -> VideoSize {
    VideoSize::new(width, height)
}

// Tongyi Wanxiang tiers
const TONGYI_720P_SIZES: &[VideoSize] = &[
    sz(1280, 720), // 16:9
    sz(960, 960),  // 1:1
    sz(720, 1280), // 9:16
    sz(1088, 832), // 4:3
    sz(832, 1088), // 3:4
];

const TONGYI_480P_SIZES: &[VideoSize] = &[
    sz(832, 480), // 16:9
    sz(624, 624), // 1:1
    sz(480, 832), // 9:16
];

// Vidu: base resolution, then 720P, then 1080P
const VIDU_SIZES: &[VideoSize] = &[
    sz(512, 288),
    sz(288, 512),
    sz(512, 512),
    sz(1280, 720),
    sz(720, 1280),
    sz(720, 720),
    sz(1920, 1080),
    sz(1080, 1920),
    sz(1080, 1080),
];

// Luma: 540P through 4K
const LUMA_SIZES: &[VideoSize] = &[
    sz(960, 540),
    sz(540, 960),
    sz(540, 540),
    sz(1280, 720),
    sz(720, 1280),
    sz(720, 720),
    sz(1920, 1080),
    sz(1080, 1920),
    sz(1080, 1080),
    sz(3840, 2160),
    sz(2160, 3840),
    sz(2160, 2160),
];

const RUNWAY_SIZES: &[VideoSize] = &[
    sz(1280, 720),
    sz(720, 1280),
    sz(720, 720),
    sz(1920, 1080),
    sz(1080, 1920),
    sz(1080, 1080),
];

const SILICONFLOW_SIZES: &[VideoSize] = &[sz(1280, 720), sz(720, 1280), sz(720, 720)];

const NO_SIZES: &[VideoSize] = &[];
const NO_RESOLUTIONS: &[Resolution] = &[];
const NO_DURATIONS: &[u32] = &[];
const NO_RATIOS: &[AspectRatio] = &[];

const ALL_RATIOS: &[AspectRatio] = &[
    AspectRatio::Landscape,
    AspectRatio::Portrait,
    AspectRatio::Square,
];

/// Per-provider catalog data
#[derive(Debug, Clone, Default)]
struct ProviderEntry {
    /// Size set returned when the model is absent or unrecognized
    default_sizes: Vec<VideoSize>,
    /// Size sets for specific known models (canonical model id keys)
    model_sizes: Vec<(&'static str, Vec<VideoSize>)>,
    /// (tier, ratio) -> size, for providers whose API takes labels
    tiers: Vec<(Resolution, AspectRatio, VideoSize)>,
    /// Full resolution list, returned when no model is given
    default_resolutions: Vec<Resolution>,
    /// Resolution list for an unrecognized model
    fallback_resolutions: Vec<Resolution>,
    /// Resolution lists for specific known models
    model_resolutions: Vec<(&'static str, Vec<Resolution>)>,
    /// Full duration list (seconds), returned when no model is given
    default_durations: Vec<u32>,
    /// Duration list for an unrecognized model
    fallback_durations: Vec<u32>,
    /// Duration lists for specific known models
    model_durations: Vec<(&'static str, Vec<u32>)>,
    /// Aspect ratio labels the provider accepts
    aspect_ratios: Vec<AspectRatio>,
}

/// Immutable catalog of vendor-supported sizes
///
/// Build once, share by reference. All lookups are pure functions over the
/// catalog plus caller input; no lookup ever fails — missing data degrades
/// to empty slices or provider defaults.
#[derive(Debug, Clone, Default)]
pub struct SizeCatalog {
    providers: Vec<(ProviderType, ProviderEntry)>,
}

impl SizeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the default size set for a provider.
    ///
    /// Intended for synthetic catalogs in tests; the real vendor data comes
    /// from [`SizeCatalog::builtin`]. Order is preserved and significant.
    pub fn with_sizes(mut self, provider: ProviderType, sizes: Vec<VideoSize>) -> Self {
        self.entry_mut(provider).default_sizes = sizes;
        self
    }

    /// Register a model-specific size set for a provider.
    ///
    /// The key must be the canonical model id; lookups go through the model
    /// enums, so unknown ids are unreachable.
    pub fn with_model_sizes(
        mut self,
        provider: ProviderType,
        model: &'static str,
        sizes: Vec<VideoSize>,
    ) -> Self {
        self.entry_mut(provider).model_sizes.push((model, sizes));
        self
    }

    fn entry(&self, provider: ProviderType) -> Option<&ProviderEntry> {
        self.providers
            .iter()
            .find(|(p, _)| *p == provider)
            .map(|(_, e)| e)
    }

    fn entry_mut(&mut self, provider: ProviderType) -> &mut ProviderEntry {
        let idx = match self.providers.iter().position(|(p, _)| *p == provider) {
            Some(idx) => idx,
            None => {
                self.providers.push((provider, ProviderEntry::default()));
                self.providers.len() - 1
            }
        };
        &mut self.providers[idx].1
    }

    /// Sizes the given provider (optionally restricted to a model) accepts.
    ///
    /// Never fails: providers without registered data yield an empty slice,
    /// and an absent or unrecognized model degrades to the provider default
    /// set. The returned order is the catalog insertion order the matcher
    /// relies on for tie-breaking.
    pub fn supported_sizes(&self, provider: ProviderType, model: Option<&str>) -> &[VideoSize] {
        let Some(entry) = self.entry(provider) else {
            return NO_SIZES;
        };

        if let Some(id) = model.and_then(|m| canonical_model_id(provider, m)) {
            if let Some((_, sizes)) = entry.model_sizes.iter().find(|(key, _)| *key == id) {
                return sizes;
            }
        }
        &entry.default_sizes
    }

    /// Resolution tiers the given provider (optionally restricted to a
    /// model) supports.
    ///
    /// No model yields the provider's full list; an unrecognized model
    /// degrades to the provider's safe fallback tier.
    pub fn supported_resolutions(
        &self,
        provider: ProviderType,
        model: Option<&str>,
    ) -> &[Resolution] {
        let Some(entry) = self.entry(provider) else {
            return NO_RESOLUTIONS;
        };

        match model {
            None => &entry.default_resolutions,
            Some(raw) => {
                if let Some(id) = canonical_model_id(provider, raw) {
                    if let Some((_, tiers)) =
                        entry.model_resolutions.iter().find(|(key, _)| *key == id)
                    {
                        return tiers;
                    }
                }
                &entry.fallback_resolutions
            }
        }
    }

    /// Video durations (seconds) the given provider supports.
    pub fn supported_durations(&self, provider: ProviderType, model: Option<&str>) -> &[u32] {
        let Some(entry) = self.entry(provider) else {
            return NO_DURATIONS;
        };

        match model {
            None => &entry.default_durations,
            Some(raw) => {
                if let Some(id) = canonical_model_id(provider, raw) {
                    if let Some((_, durations)) =
                        entry.model_durations.iter().find(|(key, _)| *key == id)
                    {
                        return durations;
                    }
                }
                if entry.model_durations.is_empty() {
                    // Providers without per-model duration tables have one
                    // list for everything.
                    &entry.default_durations
                } else {
                    &entry.fallback_durations
                }
            }
        }
    }

    /// Aspect ratio labels the given provider accepts
    pub fn aspect_ratios(&self, provider: ProviderType) -> &[AspectRatio] {
        self.entry(provider)
            .map(|e| e.aspect_ratios.as_slice())
            .unwrap_or(NO_RATIOS)
    }

    /// Concrete size for a (resolution tier, aspect ratio) pair, for
    /// providers whose catalog is organized by labels.
    pub fn size_for(
        &self,
        provider: ProviderType,
        resolution: Resolution,
        aspect_ratio: AspectRatio,
    ) -> Option<VideoSize> {
        self.entry(provider)?
            .tiers
            .iter()
            .find(|(tier, ratio, _)| *tier == resolution && *ratio == aspect_ratio)
            .map(|(_, _, size)| *size)
    }

    /// The catalog of real vendor tables
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        // Tongyi Wanxiang: sizes keyed per model; turbo tiers add 480P.
        {
            let entry = catalog.entry_mut(ProviderType::Tongyi);
            entry.default_sizes = TONGYI_720P_SIZES.to_vec();
            let turbo: Vec<VideoSize> = TONGYI_720P_SIZES
                .iter()
                .chain(TONGYI_480P_SIZES)
                .copied()
                .collect();
            entry.model_sizes = vec![
                (TongyiModel::T2vTurbo.as_str(), turbo.clone()),
                (TongyiModel::T2vPlus.as_str(), TONGYI_720P_SIZES.to_vec()),
                (TongyiModel::I2vTurbo.as_str(), turbo),
                (TongyiModel::I2vPlus.as_str(), TONGYI_720P_SIZES.to_vec()),
                (TongyiModel::VacePlus.as_str(), TONGYI_720P_SIZES.to_vec()),
            ];
            entry.default_resolutions = vec![Resolution::P720, Resolution::P480];
            entry.fallback_resolutions = vec![Resolution::P720];
            entry.model_resolutions = vec![
                (
                    TongyiModel::T2vTurbo.as_str(),
                    vec![Resolution::P720, Resolution::P480],
                ),
                (TongyiModel::T2vPlus.as_str(), vec![Resolution::P720]),
                (
                    TongyiModel::I2vTurbo.as_str(),
                    vec![Resolution::P720, Resolution::P480],
                ),
                (TongyiModel::I2vPlus.as_str(), vec![Resolution::P720]),
                (TongyiModel::VacePlus.as_str(), vec![Resolution::P720]),
            ];
        }

        // Vidu: one size set for all models, resolutions/durations per model.
        {
            let entry = catalog.entry_mut(ProviderType::Vidu);
            entry.default_sizes = VIDU_SIZES.to_vec();
            entry.tiers = vec![
                (Resolution::Base512, AspectRatio::Landscape, sz(512, 288)),
                (Resolution::Base512, AspectRatio::Portrait, sz(288, 512)),
                (Resolution::Base512, AspectRatio::Square, sz(512, 512)),
                (Resolution::P720, AspectRatio::Landscape, sz(1280, 720)),
                (Resolution::P720, AspectRatio::Portrait, sz(720, 1280)),
                (Resolution::P720, AspectRatio::Square, sz(720, 720)),
                (Resolution::P1080, AspectRatio::Landscape, sz(1920, 1080)),
                (Resolution::P1080, AspectRatio::Portrait, sz(1080, 1920)),
                (Resolution::P1080, AspectRatio::Square, sz(1080, 1080)),
            ];
            entry.default_resolutions =
                vec![Resolution::Base512, Resolution::P720, Resolution::P1080];
            entry.fallback_resolutions = vec![Resolution::P720];
            entry.model_resolutions = vec![
                (
                    ViduModel::Q1.as_str(),
                    vec![Resolution::P720, Resolution::P1080],
                ),
                (
                    ViduModel::V2.as_str(),
                    vec![Resolution::P720, Resolution::P1080],
                ),
                (
                    ViduModel::V1_5.as_str(),
                    vec![Resolution::Base512, Resolution::P720, Resolution::P1080],
                ),
                (ViduModel::V1.as_str(), vec![Resolution::Base512]),
            ];
            entry.default_durations = vec![4, 5, 8];
            entry.fallback_durations = vec![4];
            entry.model_durations = vec![
                (ViduModel::Q1.as_str(), vec![4, 5]),
                (ViduModel::V2.as_str(), vec![4, 8]),
                (ViduModel::V1_5.as_str(), vec![4, 8]),
                (ViduModel::V1.as_str(), vec![4, 8]),
            ];
            entry.aspect_ratios = ALL_RATIOS.to_vec();
        }

        // Luma Dream Machine
        {
            let entry = catalog.entry_mut(ProviderType::Luma);
            entry.default_sizes = LUMA_SIZES.to_vec();
            entry.tiers = vec![
                (Resolution::P540, AspectRatio::Landscape, sz(960, 540)),
                (Resolution::P540, AspectRatio::Portrait, sz(540, 960)),
                (Resolution::P540, AspectRatio::Square, sz(540, 540)),
                (Resolution::P720, AspectRatio::Landscape, sz(1280, 720)),
                (Resolution::P720, AspectRatio::Portrait, sz(720, 1280)),
                (Resolution::P720, AspectRatio::Square, sz(720, 720)),
                (Resolution::P1080, AspectRatio::Landscape, sz(1920, 1080)),
                (Resolution::P1080, AspectRatio::Portrait, sz(1080, 1920)),
                (Resolution::P1080, AspectRatio::Square, sz(1080, 1080)),
                (Resolution::Uhd4k, AspectRatio::Landscape, sz(3840, 2160)),
                (Resolution::Uhd4k, AspectRatio::Portrait, sz(2160, 3840)),
                (Resolution::Uhd4k, AspectRatio::Square, sz(2160, 2160)),
            ];
            entry.default_resolutions = vec![
                Resolution::P540,
                Resolution::P720,
                Resolution::P1080,
                Resolution::Uhd4k,
            ];
            entry.fallback_resolutions = vec![Resolution::P720];
            entry.model_resolutions = vec![
                (
                    LumaModel::Ray2Flash.as_str(),
                    vec![
                        Resolution::P540,
                        Resolution::P720,
                        Resolution::P1080,
                        Resolution::Uhd4k,
                    ],
                ),
                (
                    LumaModel::Ray2.as_str(),
                    vec![
                        Resolution::P540,
                        Resolution::P720,
                        Resolution::P1080,
                        Resolution::Uhd4k,
                    ],
                ),
                (
                    LumaModel::Ray1_6.as_str(),
                    vec![Resolution::P540, Resolution::P720, Resolution::P1080],
                ),
            ];
            entry.default_durations = vec![4, 5, 8, 10, 15];
            entry.aspect_ratios = ALL_RATIOS.to_vec();
        }

        // Runway
        {
            let entry = catalog.entry_mut(ProviderType::Runway);
            entry.default_sizes = RUNWAY_SIZES.to_vec();
            entry.tiers = vec![
                (Resolution::P720, AspectRatio::Landscape, sz(1280, 720)),
                (Resolution::P720, AspectRatio::Portrait, sz(720, 1280)),
                (Resolution::P720, AspectRatio::Square, sz(720, 720)),
                (Resolution::P1080, AspectRatio::Landscape, sz(1920, 1080)),
                (Resolution::P1080, AspectRatio::Portrait, sz(1080, 1920)),
                (Resolution::P1080, AspectRatio::Square, sz(1080, 1080)),
            ];
            entry.default_resolutions = vec![Resolution::P720, Resolution::P1080];
            entry.fallback_resolutions = vec![Resolution::P720];
            entry.model_resolutions = vec![
                (
                    RunwayModel::Gen4Turbo.as_str(),
                    vec![Resolution::P720, Resolution::P1080],
                ),
                (
                    RunwayModel::Gen4Image.as_str(),
                    vec![Resolution::P720, Resolution::P1080],
                ),
            ];
            entry.default_durations = vec![4, 5, 8, 10, 15];
            entry.aspect_ratios = ALL_RATIOS.to_vec();
        }

        // SiliconFlow: 720P only
        {
            let entry = catalog.entry_mut(ProviderType::SiliconFlow);
            entry.default_sizes = SILICONFLOW_SIZES.to_vec();
            entry.tiers = vec![
                (Resolution::P720, AspectRatio::Landscape, sz(1280, 720)),
                (Resolution::P720, AspectRatio::Portrait, sz(720, 1280)),
                (Resolution::P720, AspectRatio::Square, sz(720, 720)),
            ];
            entry.default_resolutions = vec![Resolution::P720];
            entry.fallback_resolutions = vec![Resolution::P720];
            entry.model_resolutions = vec![
                (SiliconFlowModel::WanT2v14b.as_str(), vec![Resolution::P720]),
                (
                    SiliconFlowModel::WanT2v14bTurbo.as_str(),
                    vec![Resolution::P720],
                ),
                (
                    SiliconFlowModel::WanI2v14b720p.as_str(),
                    vec![Resolution::P720],
                ),
                (
                    SiliconFlowModel::WanI2v14b720pTurbo.as_str(),
                    vec![Resolution::P720],
                ),
            ];
            entry.aspect_ratios = ALL_RATIOS.to_vec();
        }

        catalog
    }
}

/// Parse a free-text model string into the canonical model id for the
/// provider's model enum. Unknown strings yield `None` — the caller
/// degrades to provider defaults rather than erroring.
fn canonical_model_id(provider: ProviderType, model: &str) -> Option<&'static str> {
    match provider {
        ProviderType::Tongyi => model.parse::<TongyiModel>().ok().map(|m| m.as_str()),
        ProviderType::Vidu => model.parse::<ViduModel>().ok().map(|m| m.as_str()),
        ProviderType::Luma => model.parse::<LumaModel>().ok().map(|m| m.as_str()),
        ProviderType::Runway => model.parse::<RunwayModel>().ok().map(|m| m.as_str()),
        ProviderType::SiliconFlow => {
            model.parse::<SiliconFlowModel>().ok().map(|m| m.as_str())
        }
        _ => None,
    }
}

lazy_static! {
    static ref BUILTIN_CATALOG: SizeCatalog = SizeCatalog::builtin();
}

/// Shared instance of the builtin catalog.
///
/// Constructed fully on first access, then immutable; safe to read from any
/// number of threads without coordination.
pub fn builtin_catalog() -> &'static SizeCatalog {
    &BUILTIN_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_degrades_to_default() {
        let catalog = SizeCatalog::builtin();
        let default = catalog.supported_sizes(ProviderType::Tongyi, None);
        let unknown =
            catalog.supported_sizes(ProviderType::Tongyi, Some("not-a-real-model"));
        assert_eq!(default, unknown);
        assert_eq!(default, TONGYI_720P_SIZES);
    }

    #[test]
    fn test_tongyi_turbo_includes_480p() {
        let catalog = SizeCatalog::builtin();
        let sizes = catalog.supported_sizes(ProviderType::Tongyi, Some("wanx2.1-t2v-turbo"));
        assert_eq!(sizes.len(), TONGYI_720P_SIZES.len() + TONGYI_480P_SIZES.len());
        // 720P tier first, so tie-breaks prefer it
        assert_eq!(sizes[0], sz(1280, 720));
        assert!(sizes.contains(&sz(832, 480)));
    }

    #[test]
    fn test_vidu_sizes_ignore_model() {
        let catalog = SizeCatalog::builtin();
        assert_eq!(
            catalog.supported_sizes(ProviderType::Vidu, Some("viduq1")),
            catalog.supported_sizes(ProviderType::Vidu, None)
        );
    }

    #[test]
    fn test_provider_without_data_yields_empty_set() {
        let catalog = SizeCatalog::builtin();
        assert!(catalog.supported_sizes(ProviderType::Zhipu, None).is_empty());
        assert!(catalog
            .supported_sizes(ProviderType::Stability, Some("anything"))
            .is_empty());
    }

    #[test]
    fn test_resolutions_parse_with_fallback() {
        let catalog = SizeCatalog::builtin();
        assert_eq!(
            catalog.supported_resolutions(ProviderType::Vidu, None),
            &[Resolution::Base512, Resolution::P720, Resolution::P1080]
        );
        assert_eq!(
            catalog.supported_resolutions(ProviderType::Vidu, Some("vidu1.0")),
            &[Resolution::Base512]
        );
        assert_eq!(
            catalog.supported_resolutions(ProviderType::Vidu, Some("vidu99")),
            &[Resolution::P720]
        );
    }

    #[test]
    fn test_luma_ray_1_6_has_no_4k() {
        let catalog = SizeCatalog::builtin();
        let tiers = catalog.supported_resolutions(ProviderType::Luma, Some("ray-1-6"));
        assert!(!tiers.contains(&Resolution::Uhd4k));
        let tiers = catalog.supported_resolutions(ProviderType::Luma, Some("ray-2"));
        assert!(tiers.contains(&Resolution::Uhd4k));
    }

    #[test]
    fn test_size_for_tier_and_ratio() {
        let catalog = SizeCatalog::builtin();
        assert_eq!(
            catalog.size_for(ProviderType::Vidu, Resolution::P1080, AspectRatio::Portrait),
            Some(sz(1080, 1920))
        );
        assert_eq!(
            catalog.size_for(ProviderType::Luma, Resolution::Uhd4k, AspectRatio::Landscape),
            Some(sz(3840, 2160))
        );
        // Tongyi's tiers are not ratio-keyed
        assert_eq!(
            catalog.size_for(ProviderType::Tongyi, Resolution::P720, AspectRatio::Landscape),
            None
        );
        // Runway has no 4K tier
        assert_eq!(
            catalog.size_for(ProviderType::Runway, Resolution::Uhd4k, AspectRatio::Square),
            None
        );
    }

    #[test]
    fn test_durations() {
        let catalog = SizeCatalog::builtin();
        assert_eq!(catalog.supported_durations(ProviderType::Vidu, None), &[4, 5, 8]);
        assert_eq!(
            catalog.supported_durations(ProviderType::Vidu, Some("viduq1")),
            &[4, 5]
        );
        assert_eq!(
            catalog.supported_durations(ProviderType::Vidu, Some("mystery-model")),
            &[4]
        );
        // Luma durations are model-independent
        assert_eq!(
            catalog.supported_durations(ProviderType::Luma, Some("mystery-model")),
            &[4, 5, 8, 10, 15]
        );
    }

    #[test]
    fn test_synthetic_catalog_construction() {
        let catalog = SizeCatalog::new()
            .with_sizes(ProviderType::Zhipu, vec![sz(1920, 1080)])
            .with_model_sizes(ProviderType::Zhipu, "cogvideox", vec![sz(1280, 720)]);

        assert_eq!(
            catalog.supported_sizes(ProviderType::Zhipu, None),
            &[sz(1920, 1080)]
        );
        // Zhipu has no model enum, so the model string cannot resolve and
        // the default set wins.
        assert_eq!(
            catalog.supported_sizes(ProviderType::Zhipu, Some("cogvideox")),
            &[sz(1920, 1080)]
        );
    }
}
