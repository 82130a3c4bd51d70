//! File discovery module for finding video files to process.
//!
//! Scans the input directory recursively for files with a known video
//! extension (case-insensitive). An empty result is not an error; the
//! caller reports "nothing to do" and exits cleanly.

use crate::error::CoreResult;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions eligible for processing, matched case-insensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "flv", "wmv"];

/// Finds video files eligible for processing under the given directory.
///
/// Results are sorted so a batch always runs in a stable order.
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let eligible = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
            .unwrap_or(false);
        if eligible {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
