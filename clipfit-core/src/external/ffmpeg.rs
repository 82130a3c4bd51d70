//! FFmpeg command building and execution for the normalization encode.
//!
//! Builds the filter chain (cover-scale, center-crop, forced frame rate)
//! and the encoder arguments for the submission profile, then drives the
//! ffmpeg process through ffmpeg-sidecar's event iterator.

use crate::config::TargetPolicy;
use crate::error::{CoreError, CoreResult};
use crate::processing::geometry::GeometryPlan;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use log::debug;

use std::path::{Path, PathBuf};

/// Parameters for one normalization encode.
#[derive(Debug, Clone)]
pub struct EncodeParams {
    pub input_path: PathBuf,
    pub output_path: PathBuf,

    /// Scale and crop computed by the geometry planner
    pub geometry: GeometryPlan,

    /// Carry the source audio stream into the output unmodified
    pub copy_audio: bool,
}

/// Builds the ffmpeg invocation for one non-conformant source.
///
/// The filter chain scales to cover, crops centered, and forces the target
/// frame rate; codec, bitrate, preset, and pixel format are pinned to the
/// submission profile. The output path is always overwritten.
pub fn build_ffmpeg_command(
    ffmpeg: &Path,
    params: &EncodeParams,
    policy: &TargetPolicy,
) -> FfmpegCommand {
    let g = &params.geometry;
    let filter = format!(
        "scale={}:{},crop={}:{}:{}:{},fps={}",
        g.scale_width, g.scale_height, policy.width, policy.height, g.crop_x, g.crop_y, policy.fps
    );

    let mut cmd = FfmpegCommand::new_with_path(ffmpeg);
    cmd.hide_banner();
    cmd.overwrite();
    cmd.input(params.input_path.to_string_lossy().as_ref());
    cmd.args(["-vf", &filter]);
    cmd.args(["-c:v", "libx264"]);
    cmd.args(["-b:v", &format!("{}k", policy.bitrate_kbps)]);
    cmd.args(["-preset", "fast"]);
    cmd.args(["-pix_fmt", "yuv420p"]);
    cmd.args(["-map", "0:v:0"]);
    if params.copy_audio {
        cmd.args(["-map", "0:a"]);
        cmd.args(["-c:a", "copy"]);
    } else {
        cmd.arg("-an");
    }
    cmd.output(params.output_path.to_string_lossy().as_ref());
    cmd
}

/// Runs one encode to completion.
///
/// Error-level lines from the ffmpeg log stream are collected so a failed
/// encode surfaces the tool's own diagnostics, not just an exit status.
pub fn run_ffmpeg_encode(
    ffmpeg: &Path,
    params: &EncodeParams,
    policy: &TargetPolicy,
) -> CoreResult<()> {
    let mut cmd = build_ffmpeg_command(ffmpeg, params, policy);
    debug!("ffmpeg command: {cmd:?}");

    let mut child = cmd.spawn().map_err(|e| {
        CoreError::CommandStart("ffmpeg".to_string(), std::io::Error::other(e.to_string()))
    })?;

    let mut error_lines: Vec<String> = Vec::new();
    match child.iter() {
        Ok(events) => {
            for event in events {
                match event {
                    FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                        debug!("ffmpeg: {line}");
                        error_lines.push(line);
                    }
                    FfmpegEvent::Error(line) => {
                        debug!("ffmpeg: {line}");
                        error_lines.push(line);
                    }
                    FfmpegEvent::Log(_, line) => debug!("ffmpeg: {line}"),
                    _ => {}
                }
            }
        }
        Err(e) => log::warn!("Could not read ffmpeg event stream: {e}"),
    }

    let status = child.wait().map_err(|e| {
        CoreError::CommandStart("ffmpeg".to_string(), std::io::Error::other(e.to_string()))
    })?;

    if status.success() {
        Ok(())
    } else {
        let detail = if error_lines.is_empty() {
            format!("exit status {status}")
        } else {
            error_lines.join("; ")
        };
        Err(CoreError::CommandFailed("ffmpeg".to_string(), detail))
    }
}
