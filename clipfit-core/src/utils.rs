//! Utility functions for formatting and output naming.

use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Marker appended to the filename stem of silent clips. It is duplicated
/// on output so a human skimming the folder cannot miss it, and uses only
/// characters that are legal on every target filesystem.
pub const NO_AUDIO_MARKER: &str = "[NO-AUDIO]";

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Safely extracts the filename from a path with consistent error handling.
pub fn filename_safe(path: &Path) -> CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}

/// Derives the output filename for an input clip.
///
/// Sources with audio keep their original name. Silent sources get the
/// no-audio marker inserted twice before the extension, e.g.
/// `clip.mp4` -> `clip_[NO-AUDIO][NO-AUDIO].mp4`.
pub fn output_file_name(input: &Path, has_audio: bool) -> CoreResult<String> {
    if has_audio {
        return filename_safe(input);
    }
    let stem = input
        .file_stem()
        .ok_or_else(|| {
            CoreError::PathError(format!("Failed to get filename stem for {}", input.display()))
        })?
        .to_string_lossy();
    Ok(match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_{NO_AUDIO_MARKER}{NO_AUDIO_MARKER}.{ext}"),
        None => format!("{stem}_{NO_AUDIO_MARKER}{NO_AUDIO_MARKER}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn output_name_unchanged_with_audio() {
        let input = PathBuf::from("/videos/clip.mp4");
        assert_eq!(output_file_name(&input, true).unwrap(), "clip.mp4");
    }

    #[test]
    fn output_name_flags_silent_clips() {
        let input = PathBuf::from("/videos/clip.mp4");
        assert_eq!(
            output_file_name(&input, false).unwrap(),
            "clip_[NO-AUDIO][NO-AUDIO].mp4"
        );
    }

    #[test]
    fn output_name_keeps_inner_dots() {
        let input = PathBuf::from("/videos/take.2.final.mov");
        assert_eq!(
            output_file_name(&input, false).unwrap(),
            "take.2.final_[NO-AUDIO][NO-AUDIO].mov"
        );
    }

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MiB");
    }
}
