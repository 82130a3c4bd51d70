//! Scale/crop geometry planning.
//!
//! Fits a source frame onto the target frame without distortion: uniform
//! cover-scale so both dimensions meet or exceed the target, then a
//! centered crop that removes exactly the excess. Stateless, recomputed
//! per file.

use serde::{Deserialize, Serialize};

use crate::config::TargetPolicy;

/// Post-scale dimensions and centered crop offsets for one source frame.
///
/// Invariant: `scale_width >= target width` and `scale_height >= target
/// height`; crop offsets are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryPlan {
    pub scale_width: u32,
    pub scale_height: u32,
    pub crop_x: u32,
    pub crop_y: u32,
}

/// Computes the cover-scale and center-crop for a source frame.
///
/// The width-matched scale is tried first; when it under-covers the target
/// height the scale is re-derived matching height instead. After either
/// branch both scaled dimensions cover the target, so the integer crop
/// offsets cannot underflow.
pub fn plan(source_width: u32, source_height: u32, policy: &TargetPolicy) -> GeometryPlan {
    let (target_w, target_h) = (policy.width, policy.height);

    let mut scale_w = target_w;
    let mut scale_h = scaled_dimension(source_height, target_w, source_width);
    if scale_h < target_h {
        scale_h = target_h;
        scale_w = scaled_dimension(source_width, target_h, source_height);
    }

    GeometryPlan {
        scale_width: scale_w,
        scale_height: scale_h,
        crop_x: (scale_w - target_w) / 2,
        crop_y: (scale_h - target_h) / 2,
    }
}

/// `dim * num / den`, rounded to the nearest pixel.
fn scaled_dimension(dim: u32, num: u32, den: u32) -> u32 {
    (f64::from(dim) * f64::from(num) / f64::from(den)).round() as u32
}
