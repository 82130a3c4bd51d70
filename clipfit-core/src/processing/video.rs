//! Per-file orchestration: probe, classify, then copy or encode.
//!
//! Every failure is caught at this boundary and converted into a logged
//! `Skipped` outcome; nothing an individual file does can abort the batch.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::ffmpeg::{run_ffmpeg_encode, EncodeParams};
use crate::external::{ffprobe, ToolPaths};
use crate::processing::conformance::Conformance;
use crate::processing::geometry;
use crate::utils::{format_bytes, output_file_name};

use log::{debug, error, info, warn};

use std::path::Path;

/// Terminal state for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Already conformant; passed through byte-identically
    Copied,

    /// Re-encoded to the target profile
    Encoded,

    /// Not processed; the reason has been logged
    Skipped(String),
}

/// Processes a single input file to its terminal state.
pub fn process_file(tools: &ToolPaths, config: &CoreConfig, input_path: &Path) -> FileOutcome {
    let probe = match ffprobe::probe_video(&tools.ffprobe, input_path) {
        Ok(probe) => probe,
        Err(e) => {
            warn!("Skipping unprobeable input {}: {}", input_path.display(), e);
            return FileOutcome::Skipped(format!("probe failed: {e}"));
        }
    };

    debug!(
        "{}: {}x{} @ {:.3} fps, {} kbps, audio={}",
        input_path.display(),
        probe.width,
        probe.height,
        probe.fps,
        probe.bitrate_kbps,
        probe.has_audio
    );

    let output_name = match output_file_name(input_path, probe.has_audio) {
        Ok(name) => name,
        Err(e) => {
            warn!("Skipping {}: {}", input_path.display(), e);
            return FileOutcome::Skipped(format!("bad path: {e}"));
        }
    };
    if !probe.has_audio {
        info!(
            "No audio track detected in {}; flagging output as {}",
            input_path.display(),
            output_name
        );
    }
    let output_path = config.output_dir.join(output_name);

    let conformance = Conformance::check(&probe, &config.policy);
    if conformance.is_conformant() {
        info!("Conformant, copying through: {}", input_path.display());
        match copy_through(input_path, &output_path) {
            Ok(bytes) => {
                info!("Copied {} ({})", output_path.display(), format_bytes(bytes));
                FileOutcome::Copied
            }
            Err(e) => {
                error!("Copy failed for {}: {}", input_path.display(), e);
                FileOutcome::Skipped(format!("copy failed: {e}"))
            }
        }
    } else {
        let plan = geometry::plan(probe.width, probe.height, &config.policy);
        info!(
            "Re-encoding {} (aspect_ok={}, resolution_ok={}, bitrate_ok={}): scale {}x{}, crop at ({}, {})",
            input_path.display(),
            conformance.aspect_ok,
            conformance.resolution_ok,
            conformance.bitrate_ok,
            plan.scale_width,
            plan.scale_height,
            plan.crop_x,
            plan.crop_y
        );
        let params = EncodeParams {
            input_path: input_path.to_path_buf(),
            output_path: output_path.clone(),
            geometry: plan,
            copy_audio: probe.has_audio,
        };
        match run_ffmpeg_encode(&tools.ffmpeg, &params, &config.policy) {
            Ok(()) => {
                info!("Encoded {}", output_path.display());
                FileOutcome::Encoded
            }
            Err(e) => {
                error!("Encode failed for {}: {}", input_path.display(), e);
                FileOutcome::Skipped(format!("encode failed: {e}"))
            }
        }
    }
}

/// Byte-for-byte pass-through copy that keeps the source modification
/// time. Returns the number of bytes copied.
fn copy_through(input_path: &Path, output_path: &Path) -> CoreResult<u64> {
    let bytes = std::fs::copy(input_path, output_path)?;
    let modified = std::fs::metadata(input_path)?.modified()?;
    let file = std::fs::OpenOptions::new().write(true).open(output_path)?;
    file.set_modified(modified)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copy_through_is_byte_identical_and_keeps_mtime() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let src = dir.path().join("clip.mp4");
        let dst = dir.path().join("out").join("clip.mp4");
        fs::create_dir(dir.path().join("out"))?;
        fs::write(&src, b"not really a video, but bytes are bytes")?;

        let bytes = copy_through(&src, &dst)?;

        assert_eq!(bytes, fs::metadata(&src)?.len());
        assert_eq!(fs::read(&src)?, fs::read(&dst)?);
        assert_eq!(
            fs::metadata(&src)?.modified()?,
            fs::metadata(&dst)?.modified()?
        );
        Ok(())
    }

    #[test]
    fn copy_through_missing_source_fails() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("absent.mp4");
        let dst = dir.path().join("out.mp4");
        assert!(copy_through(&src, &dst).is_err());
    }
}
