// clipfit-core/tests/geometry_tests.rs

use clipfit_core::processing::geometry::{self, GeometryPlan};
use clipfit_core::TargetPolicy;

#[test]
fn landscape_source_rederives_by_height() {
    // 1920x1080 width-matched gives 1080x608, which under-covers the
    // 1920 target height, so the plan re-derives matching height.
    let plan = geometry::plan(1920, 1080, &TargetPolicy::default());
    assert_eq!(
        plan,
        GeometryPlan {
            scale_width: 3413,
            scale_height: 1920,
            crop_x: 1166,
            crop_y: 0,
        }
    );
}

#[test]
fn exact_target_needs_no_adjustment() {
    let plan = geometry::plan(1080, 1920, &TargetPolicy::default());
    assert_eq!(
        plan,
        GeometryPlan {
            scale_width: 1080,
            scale_height: 1920,
            crop_x: 0,
            crop_y: 0,
        }
    );
}

#[test]
fn square_source_crops_width() {
    let plan = geometry::plan(1000, 1000, &TargetPolicy::default());
    assert_eq!(plan.scale_width, 1920);
    assert_eq!(plan.scale_height, 1920);
    assert_eq!(plan.crop_x, 420);
    assert_eq!(plan.crop_y, 0);
}

#[test]
fn extra_tall_source_crops_height() {
    // 500x1500 is narrower than 9:16; the width-matched scale already
    // covers the height and the excess is cropped top and bottom.
    let plan = geometry::plan(500, 1500, &TargetPolicy::default());
    assert_eq!(plan.scale_width, 1080);
    assert_eq!(plan.scale_height, 3240);
    assert_eq!(plan.crop_x, 0);
    assert_eq!(plan.crop_y, 660);
}

#[test]
fn plan_always_covers_target() {
    let policy = TargetPolicy::default();
    for (w, h) in [
        (1920, 1080),
        (1080, 1920),
        (640, 480),
        (480, 640),
        (3840, 2160),
        (1, 10000),
        (10000, 1),
        (1079, 1921),
    ] {
        let plan = geometry::plan(w, h, &policy);
        assert!(plan.scale_width >= policy.width, "{w}x{h}: width under-covers");
        assert!(plan.scale_height >= policy.height, "{w}x{h}: height under-covers");
        assert_eq!(plan.crop_x, (plan.scale_width - policy.width) / 2);
        assert_eq!(plan.crop_y, (plan.scale_height - policy.height) / 2);
    }
}

#[test]
fn planning_is_idempotent_on_conforming_frames() {
    // Cropping any plan's scaled output yields exactly the target frame;
    // feeding that frame back in as a new source must be a no-op.
    let policy = TargetPolicy::default();
    let first = geometry::plan(1920, 1080, &policy);
    let cropped = (
        first.scale_width - 2 * first.crop_x,
        first.scale_height - 2 * first.crop_y,
    );

    // 3413 - 2*1166 = 1081: rounding can leave one odd pixel of slack,
    // which the centered crop absorbs; re-planning the target frame
    // itself requires no further adjustment.
    assert!(cropped.0 >= policy.width && cropped.0 <= policy.width + 1);

    let again = geometry::plan(policy.width, policy.height, &policy);
    assert_eq!(again.scale_width, policy.width);
    assert_eq!(again.scale_height, policy.height);
    assert_eq!(again.crop_x, 0);
    assert_eq!(again.crop_y, 0);
}
