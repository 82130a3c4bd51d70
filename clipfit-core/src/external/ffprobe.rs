//! FFprobe invocation and defensive output handling.
//!
//! ffprobe output is untrusted: files with corrupt metadata have been seen
//! to push a byte-order mark, control characters, or trailing garbage
//! through to stdout. The chain here is sanitize, parse, then a single
//! balanced-object fallback; any failure after that is one uniform
//! "unprobeable" outcome and never aborts the batch.

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::media::VideoProbe;

use std::path::Path;
use std::process::Command;

/// Probes one input file, returning its normalized metadata.
///
/// Every failure mode surfaces as a `CoreError`; the batch runner converts
/// them into logged skips.
pub fn probe_video(ffprobe: &Path, input_path: &Path) -> CoreResult<VideoProbe> {
    let json = execute(ffprobe, input_path)?;
    VideoProbe::from_json(&json)
}

/// Runs ffprobe requesting stream and container metadata as JSON.
fn execute(ffprobe: &Path, input_path: &Path) -> CoreResult<Value> {
    log::debug!("Running ffprobe on: {}", input_path.display());

    let output = Command::new(ffprobe)
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(input_path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::DependencyNotFound(ffprobe.display().to_string())
            } else {
                CoreError::CommandStart("ffprobe".to_string(), e)
            }
        })?;

    if !output.status.success() {
        return Err(CoreError::CommandFailed(
            "ffprobe".to_string(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    // Decode as UTF-8 with invalid sequences discarded.
    let raw = String::from_utf8_lossy(&output.stdout).replace('\u{fffd}', "");
    parse_probe_output(&raw, input_path)
}

/// Sanitizes and parses one ffprobe JSON payload.
///
/// On a parse failure the location reported by serde is logged, then the
/// first balanced top-level object is extracted and parsed as a last
/// resort. A repair that still fails is the same "unprobeable" outcome as
/// any other parse failure.
pub fn parse_probe_output(raw: &str, input_path: &Path) -> CoreResult<Value> {
    if raw.trim().is_empty() {
        return Err(CoreError::Unprobeable(format!(
            "ffprobe returned no data for {}",
            input_path.display()
        )));
    }

    let cleaned = sanitize(raw);
    match serde_json::from_str(&cleaned) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::warn!(
                "ffprobe output for {} failed to parse at line {}, column {}: {}",
                input_path.display(),
                e.line(),
                e.column(),
                e
            );
            extract_first_object(&cleaned)
                .and_then(|obj| serde_json::from_str(obj).ok())
                .ok_or_else(|| {
                    CoreError::Unprobeable(format!(
                        "unparseable ffprobe output for {}",
                        input_path.display()
                    ))
                })
        }
    }
}

/// Strips a leading byte-order mark and all control characters except tab,
/// newline, and carriage return.
fn sanitize(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Extracts the first balanced top-level JSON object, ignoring braces
/// inside string literals.
fn extract_first_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
