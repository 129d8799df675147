//! Catalog regression tests
//!
//! The vendor size tables are reference data that existing callers depend
//! on: evolution must be additive only. These tests pin the literal tables
//! per (provider, model) pair so an accidental reorder or removal fails
//! loudly.

use vidmai::prelude::*;

fn sizes(pairs: &[(u32, u32)]) -> Vec<VideoSize> {
    pairs.iter().map(|&(w, h)| VideoSize::new(w, h)).collect()
}

#[test]
fn tongyi_default_tier_is_pinned() {
    let catalog = builtin_catalog();
    assert_eq!(
        catalog.supported_sizes(ProviderType::Tongyi, None),
        sizes(&[
            (1280, 720),
            (960, 960),
            (720, 1280),
            (1088, 832),
            (832, 1088),
        ])
        .as_slice()
    );
}

#[test]
fn tongyi_turbo_models_append_480p_tier() {
    let catalog = builtin_catalog();
    let expected = sizes(&[
        (1280, 720),
        (960, 960),
        (720, 1280),
        (1088, 832),
        (832, 1088),
        (832, 480),
        (624, 624),
        (480, 832),
    ]);

    for model in ["wanx2.1-t2v-turbo", "wanx2.1-i2v-turbo"] {
        assert_eq!(
            catalog.supported_sizes(ProviderType::Tongyi, Some(model)),
            expected.as_slice(),
            "table changed for {model}"
        );
    }

    for model in ["wanx2.1-t2v-plus", "wanx2.1-i2v-plus", "wanx2.1-vace-plus"] {
        assert_eq!(
            catalog.supported_sizes(ProviderType::Tongyi, Some(model)),
            catalog.supported_sizes(ProviderType::Tongyi, None),
            "table changed for {model}"
        );
    }
}

#[test]
fn vidu_table_is_pinned() {
    let catalog = builtin_catalog();
    let expected = sizes(&[
        (512, 288),
        (288, 512),
        (512, 512),
        (1280, 720),
        (720, 1280),
        (720, 720),
        (1920, 1080),
        (1080, 1920),
        (1080, 1080),
    ]);
    assert_eq!(
        catalog.supported_sizes(ProviderType::Vidu, None),
        expected.as_slice()
    );
    // Vidu size tables are model-independent
    assert_eq!(
        catalog.supported_sizes(ProviderType::Vidu, Some("vidu1.5")),
        expected.as_slice()
    );
}

#[test]
fn luma_table_is_pinned() {
    let catalog = builtin_catalog();
    assert_eq!(
        catalog.supported_sizes(ProviderType::Luma, None),
        sizes(&[
            (960, 540),
            (540, 960),
            (540, 540),
            (1280, 720),
            (720, 1280),
            (720, 720),
            (1920, 1080),
            (1080, 1920),
            (1080, 1080),
            (3840, 2160),
            (2160, 3840),
            (2160, 2160),
        ])
        .as_slice()
    );
}

#[test]
fn runway_table_is_pinned() {
    let catalog = builtin_catalog();
    assert_eq!(
        catalog.supported_sizes(ProviderType::Runway, None),
        sizes(&[
            (1280, 720),
            (720, 1280),
            (720, 720),
            (1920, 1080),
            (1080, 1920),
            (1080, 1080),
        ])
        .as_slice()
    );
}

#[test]
fn siliconflow_table_is_pinned() {
    let catalog = builtin_catalog();
    assert_eq!(
        catalog.supported_sizes(ProviderType::SiliconFlow, None),
        sizes(&[(1280, 720), (720, 1280), (720, 720)]).as_slice()
    );
}

#[test]
fn providers_without_tables_stay_empty() {
    let catalog = builtin_catalog();
    for provider in [
        ProviderType::Zhipu,
        ProviderType::Stability,
        ProviderType::Pixverse,
    ] {
        assert!(catalog.supported_sizes(provider, None).is_empty());
    }
}

#[test]
fn unknown_model_degrades_to_provider_default() {
    let catalog = builtin_catalog();
    assert_eq!(
        catalog.supported_sizes(ProviderType::Tongyi, Some("not-a-real-model")),
        catalog.supported_sizes(ProviderType::Tongyi, None)
    );
}

#[test]
fn exact_match_wins() {
    // 960x960 is in the Tongyi default tier; ratio delta 0 dominates.
    assert_eq!(
        adapt_size(960, 960, ProviderType::Tongyi, None).unwrap(),
        VideoSize::new(960, 960)
    );
}

#[test]
fn closest_ratio_scenario_is_pinned() {
    // Requested 1000x500 (ratio 2.0) against the turbo table: the 16:9
    // entries are closest (|1.778 - 2.0| < |1.733 - 2.0|), and 1280x720 is
    // the first of them in table order.
    assert_eq!(
        adapt_size(1000, 500, ProviderType::Tongyi, Some("wanx2.1-t2v-turbo")).unwrap(),
        VideoSize::new(1280, 720)
    );
}

#[test]
fn empty_catalog_passes_size_through() {
    assert_eq!(
        adapt_size(1024, 576, ProviderType::Zhipu, None).unwrap(),
        VideoSize::new(1024, 576)
    );
    let matched = match_size(builtin_catalog(), 1024, 576, ProviderType::Zhipu, None).unwrap();
    assert!(!matched.was_adapted());
}

#[test]
fn every_catalog_size_round_trips_through_the_wire_form() {
    let catalog = builtin_catalog();
    for provider in [
        ProviderType::Tongyi,
        ProviderType::Vidu,
        ProviderType::Luma,
        ProviderType::Runway,
        ProviderType::SiliconFlow,
    ] {
        for size in catalog.supported_sizes(provider, None) {
            let parsed: VideoSize = size.to_string().parse().unwrap();
            assert_eq!(parsed, *size);
        }
    }
}

#[test]
fn format_invariants() {
    assert_eq!(VideoSize::new(1280, 720).to_string(), "1280*720");
    assert_eq!(
        "1280*720".parse::<VideoSize>().unwrap(),
        VideoSize::new(1280, 720)
    );
    assert!("1280x720".parse::<VideoSize>().is_err());
    assert!("abc*720".parse::<VideoSize>().is_err());
}
