//! Conformance classification.
//!
//! Pure predicates deciding whether a probed video already satisfies the
//! target constraints. Conformant files bypass the encoder entirely and
//! are copied through byte-identically.

use crate::config::TargetPolicy;
use crate::media::VideoProbe;

/// Outcome of the three conformance checks for one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conformance {
    pub aspect_ok: bool,
    pub resolution_ok: bool,
    pub bitrate_ok: bool,
}

impl Conformance {
    /// Runs all three checks against the policy.
    pub fn check(probe: &VideoProbe, policy: &TargetPolicy) -> Self {
        Self {
            aspect_ok: aspect_ok(probe.width, probe.height, policy),
            resolution_ok: resolution_ok(probe.width, probe.height, policy),
            bitrate_ok: bitrate_ok(probe.bitrate_kbps, policy),
        }
    }

    /// A video is conformant iff all three checks hold.
    pub fn is_conformant(self) -> bool {
        self.aspect_ok && self.resolution_ok && self.bitrate_ok
    }
}

/// True when the source ratio is within tolerance of the target ratio,
/// regardless of magnitude.
pub fn aspect_ok(width: u32, height: u32, policy: &TargetPolicy) -> bool {
    if height == 0 {
        return false;
    }
    let ratio = f64::from(width) / f64::from(height);
    (ratio - policy.aspect()).abs() <= policy.aspect_tolerance
}

/// Absolute-size sanity band, independent of aspect ratio. Both dimensions
/// must fall inside their band; bounds are inclusive.
pub fn resolution_ok(width: u32, height: u32, policy: &TargetPolicy) -> bool {
    let (w_min, w_max) = policy.width_range;
    let (h_min, h_max) = policy.height_range;
    (w_min..=w_max).contains(&width) && (h_min..=h_max).contains(&height)
}

/// Sources below the bitrate floor get re-encoded at the target bitrate.
pub fn bitrate_ok(bitrate_kbps: u32, policy: &TargetPolicy) -> bool {
    bitrate_kbps >= policy.min_bitrate_kbps
}
