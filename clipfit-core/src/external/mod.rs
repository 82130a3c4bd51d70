// ============================================================================
// clipfit-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: ffmpeg/ffprobe process boundaries
//
// Everything that shells out lives in this module. The probing and encoding
// engines are opaque services invoked with an argument list; the decision
// logic in processing/ stays unit-testable without any real media tooling.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Contains ffmpeg command building and execution for the normalization encode
pub mod ffmpeg;

/// Contains the ffprobe invocation and defensive output handling
pub mod ffprobe;

pub use ffmpeg::{run_ffmpeg_encode, EncodeParams};
pub use ffprobe::probe_video;

/// Locations of the ffmpeg and ffprobe binaries for this run.
///
/// A packaged install ships the tools in an `ffmpeg/` directory beside the
/// executable; a development environment uses whatever is on PATH. Resolved
/// once at startup.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

impl ToolPaths {
    /// Resolves tool locations, preferring bundled binaries over PATH.
    pub fn resolve() -> Self {
        let bundled_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("ffmpeg")));

        let locate = |name: &str| -> PathBuf {
            if let Some(dir) = &bundled_dir {
                let candidate = dir.join(format!("{name}{}", std::env::consts::EXE_SUFFIX));
                if candidate.is_file() {
                    return candidate;
                }
            }
            PathBuf::from(name)
        };

        Self {
            ffmpeg: locate("ffmpeg"),
            ffprobe: locate("ffprobe"),
        }
    }
}

/// Checks that a required external command is present and executable.
///
/// Runs the tool with `-version`, discarding its output. A missing tool is
/// a setup failure: the batch must not start without its encoder.
pub fn check_dependency(tool: &Path) -> CoreResult<()> {
    let result = Command::new(tool)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", tool.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", tool.display());
            Err(CoreError::DependencyNotFound(tool.display().to_string()))
        }
        Err(e) => {
            log::error!(
                "Failed to start dependency check for '{}': {}",
                tool.display(),
                e
            );
            Err(CoreError::CommandStart(tool.display().to_string(), e))
        }
    }
}
