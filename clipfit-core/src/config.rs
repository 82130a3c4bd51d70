//! Run configuration and the fixed output policy.
//!
//! The thresholds are compile-time defaults, not user-configurable at
//! runtime. They are modeled as an immutable value constructed once at
//! startup and passed explicitly into the classifier, planner, and
//! orchestrator so tests can substitute alternate policies.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

/// Target output profile for ad-platform submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPolicy {
    /// Output frame width in pixels
    pub width: u32,

    /// Output frame height in pixels
    pub height: u32,

    /// Forced output frame rate
    pub fps: u32,

    /// Target video bitrate in kbps for re-encoded files
    pub bitrate_kbps: u32,

    /// Minimum acceptable source bitrate in kbps
    pub min_bitrate_kbps: u32,

    /// Allowed deviation from the target aspect ratio
    pub aspect_tolerance: f64,

    /// Acceptable source width band in pixels, both bounds inclusive
    pub width_range: (u32, u32),

    /// Acceptable source height band in pixels, both bounds inclusive
    pub height_range: (u32, u32),
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            fps: 30,
            bitrate_kbps: 1000,
            min_bitrate_kbps: 516,
            aspect_tolerance: 0.01,
            width_range: (720, 1440),
            height_range: (1280, 2560),
        }
    }
}

impl TargetPolicy {
    /// Target aspect ratio as width over height (9:16 for the default
    /// 1080x1920 profile).
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory scanned recursively for source clips
    pub input_dir: PathBuf,

    /// Directory receiving normalized output files
    pub output_dir: PathBuf,

    /// Output profile applied to every file in the batch
    pub policy: TargetPolicy,
}

impl CoreConfig {
    /// Creates a configuration with the default submission policy.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            policy: TargetPolicy::default(),
        }
    }

    /// Validates the configuration before any file is touched.
    ///
    /// A missing input directory is a setup failure: the batch must not
    /// start. The output directory is created later, so it may be absent.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.input_dir.is_dir() {
            return Err(CoreError::Config(format!(
                "Input directory not found: {}",
                self.input_dir.display()
            )));
        }
        Ok(())
    }
}
