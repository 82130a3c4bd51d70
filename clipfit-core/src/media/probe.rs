//! Normalization of ffprobe output into a probe record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Frame rate assumed when the reported rational cannot be evaluated.
const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Metadata for one input file, derived from a single ffprobe invocation.
///
/// Produced once per path, consumed immediately by the classifier and (for
/// re-encodes) the geometry planner, then discarded. Nothing is cached
/// across files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoProbe {
    /// Frame width in pixels, always positive
    pub width: u32,

    /// Frame height in pixels, always positive
    pub height: u32,

    /// Frame rate evaluated from ffprobe's "num/den" rational
    pub fps: f64,

    /// Declared video bitrate in kbps; 0 when undeterminable
    pub bitrate_kbps: u32,

    /// Whether any audio-typed stream is present
    pub has_audio: bool,
}

impl VideoProbe {
    /// Builds a probe record from the ffprobe JSON tree.
    ///
    /// The first video-typed stream supplies dimensions and frame rate;
    /// any audio-typed stream sets `has_audio`. A file without a video
    /// stream is unprobeable, never a zero-filled record.
    pub fn from_json(json: &Value) -> CoreResult<Self> {
        let mut video_stream: Option<&Value> = None;
        let mut has_audio = false;

        if let Some(streams) = json["streams"].as_array() {
            for stream in streams {
                match stream["codec_type"].as_str() {
                    Some("video") if video_stream.is_none() => video_stream = Some(stream),
                    Some("audio") => has_audio = true,
                    _ => {}
                }
            }
        }

        let video = video_stream
            .ok_or_else(|| CoreError::Unprobeable("no video stream".to_string()))?;

        let width = video["width"].as_u64().unwrap_or(0) as u32;
        let height = video["height"].as_u64().unwrap_or(0) as u32;
        if width == 0 || height == 0 {
            return Err(CoreError::Unprobeable(format!(
                "invalid video dimensions {width}x{height}"
            )));
        }

        let fps = video["r_frame_rate"]
            .as_str()
            .map(parse_frame_rate)
            .unwrap_or(DEFAULT_FRAME_RATE);

        Ok(Self {
            width,
            height,
            fps,
            bitrate_kbps: resolve_bitrate_kbps(video, &json["format"]),
            has_audio,
        })
    }
}

/// Evaluates ffprobe's "num/den" frame rate as a rational division.
///
/// A plain number parses as-is. Malformed input or a zero denominator
/// falls back to 30 fps rather than failing the whole probe.
fn parse_frame_rate(raw: &str) -> f64 {
    let parsed = match raw.split_once('/') {
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().ok();
            let den = den.trim().parse::<f64>().ok();
            match (num, den) {
                (Some(n), Some(d)) if d > 0.0 => Some(n / d),
                _ => None,
            }
        }
        None => raw.trim().parse::<f64>().ok(),
    };
    match parsed {
        Some(fps) if fps.is_finite() && fps > 0.0 => fps,
        _ => DEFAULT_FRAME_RATE,
    }
}

/// Resolves the declared bitrate: the video stream's own field wins, the
/// container-level field is the fallback. A file with no parseable bitrate
/// is still processable and records 0.
fn resolve_bitrate_kbps(video: &Value, format: &Value) -> u32 {
    [&video["bit_rate"], &format["bit_rate"]]
        .into_iter()
        .find_map(field_as_u64)
        .map(|bps| (bps / 1000) as u32)
        .unwrap_or(0)
}

/// ffprobe reports bitrates as decimal strings; tolerate plain numbers too.
fn field_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}
