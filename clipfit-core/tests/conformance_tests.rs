// clipfit-core/tests/conformance_tests.rs

use clipfit_core::processing::conformance::{aspect_ok, bitrate_ok, resolution_ok, Conformance};
use clipfit_core::{TargetPolicy, VideoProbe};

fn probe(width: u32, height: u32, bitrate_kbps: u32) -> VideoProbe {
    VideoProbe {
        width,
        height,
        fps: 30.0,
        bitrate_kbps,
        has_audio: true,
    }
}

#[test]
fn exact_nine_sixteenths_passes_at_any_magnitude() {
    let policy = TargetPolicy::default();
    for (w, h) in [(9, 16), (540, 960), (1080, 1920), (2160, 3840), (4320, 7680)] {
        assert!(aspect_ok(w, h, &policy), "{w}x{h} should be aspect-ok");
    }
}

#[test]
fn aspect_outside_tolerance_fails() {
    let policy = TargetPolicy::default();
    for (w, h) in [(1080, 1080), (1920, 1080), (1000, 1920), (1080, 1280)] {
        assert!(!aspect_ok(w, h, &policy), "{w}x{h} should not be aspect-ok");
    }
}

#[test]
fn aspect_just_inside_tolerance_passes() {
    let policy = TargetPolicy::default();
    // 1090/1920 = 0.5677..., within 0.01 of 0.5625.
    assert!(aspect_ok(1090, 1920, &policy));
    // 1100/1920 = 0.5729..., outside.
    assert!(!aspect_ok(1100, 1920, &policy));
}

#[test]
fn resolution_band_bounds_are_inclusive() {
    let policy = TargetPolicy::default();
    assert!(resolution_ok(1080, 1920, &policy));
    assert!(resolution_ok(1440, 2560, &policy));
    assert!(resolution_ok(720, 1280, &policy));
    assert!(!resolution_ok(1441, 1920, &policy));
    assert!(!resolution_ok(1080, 1279, &policy));
    assert!(!resolution_ok(719, 1920, &policy));
    assert!(!resolution_ok(1080, 2561, &policy));
}

#[test]
fn both_dimensions_must_be_in_band() {
    let policy = TargetPolicy::default();
    assert!(!resolution_ok(1080, 1000, &policy));
    assert!(!resolution_ok(500, 1920, &policy));
}

#[test]
fn bitrate_floor_is_inclusive() {
    let policy = TargetPolicy::default();
    assert!(bitrate_ok(516, &policy));
    assert!(bitrate_ok(8000, &policy));
    assert!(!bitrate_ok(515, &policy));
    assert!(!bitrate_ok(0, &policy));
}

#[test]
fn conformant_requires_all_three_checks() {
    let policy = TargetPolicy::default();

    assert!(Conformance::check(&probe(1080, 1920, 2000), &policy).is_conformant());

    // Low bitrate alone forces a re-encode.
    let low_bitrate = Conformance::check(&probe(1080, 1920, 400), &policy);
    assert!(low_bitrate.aspect_ok);
    assert!(low_bitrate.resolution_ok);
    assert!(!low_bitrate.bitrate_ok);
    assert!(!low_bitrate.is_conformant());

    // Landscape alone forces a re-encode.
    assert!(!Conformance::check(&probe(1920, 1080, 2000), &policy).is_conformant());

    // Out-of-band size alone forces a re-encode: 540x960 is exactly 9:16
    // but below the resolution band.
    let tiny = Conformance::check(&probe(540, 960, 2000), &policy);
    assert!(tiny.aspect_ok);
    assert!(!tiny.resolution_ok);
    assert!(!tiny.is_conformant());
}

#[test]
fn alternate_policies_are_honored() {
    let policy = TargetPolicy {
        width: 1920,
        height: 1080,
        min_bitrate_kbps: 100,
        width_range: (1280, 3840),
        height_range: (720, 2160),
        ..TargetPolicy::default()
    };

    assert!(aspect_ok(1920, 1080, &policy));
    assert!(!aspect_ok(1080, 1920, &policy));
    assert!(resolution_ok(1920, 1080, &policy));
    assert!(bitrate_ok(100, &policy));
}
