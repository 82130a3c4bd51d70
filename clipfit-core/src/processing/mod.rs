// ============================================================================
// clipfit-core/src/processing/mod.rs
// ============================================================================
//
// BATCH PROCESSING: the sequential run over discovered input files
//
// WORKFLOW:
// 1. Validate the configuration and check for ffmpeg/ffprobe.
// 2. Create the output directory.
// 3. Fold over the input files, one at a time: probe -> classify ->
//    (copy | encode), accumulating a summary of outcomes.
//
// Per-file failures are logged and counted; only setup failures abort
// before the first file is touched.

/// Conformance classification predicates
pub mod conformance;

/// Scale/crop geometry planning
pub mod geometry;

/// Per-file orchestration
pub mod video;

pub use video::{process_file, FileOutcome};

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{check_dependency, ToolPaths};
use crate::utils::filename_safe;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use std::path::PathBuf;

/// Aggregate result of one batch run.
///
/// `attempted` always reflects the number of files the batch tried, not
/// the number that succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files attempted, regardless of outcome
    pub attempted: usize,
    pub copied: usize,
    pub encoded: usize,
    pub skipped: usize,
}

impl BatchSummary {
    fn absorb(mut self, outcome: &FileOutcome) -> Self {
        self.attempted += 1;
        match outcome {
            FileOutcome::Copied => self.copied += 1,
            FileOutcome::Encoded => self.encoded += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
        }
        self
    }
}

/// Processes every file in order, one at a time, strictly sequentially.
///
/// One file's probe, classification, and copy or encode fully complete
/// before the next file starts. The only shared state across files is the
/// accumulated summary.
pub fn process_videos(
    tools: &ToolPaths,
    config: &CoreConfig,
    files: &[PathBuf],
) -> CoreResult<BatchSummary> {
    config.validate()?;

    info!("{}", style("Checking for required external tools...").cyan());
    check_dependency(&tools.ffmpeg)?;
    info!("  {} ffmpeg found.", style("[OK]").green().bold());
    check_dependency(&tools.ffprobe)?;
    info!("  {} ffprobe found.", style("[OK]").green().bold());

    std::fs::create_dir_all(&config.output_dir)?;

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:32.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let summary = files.iter().fold(BatchSummary::default(), |summary, path| {
        let name = filename_safe(path).unwrap_or_else(|_| path.display().to_string());
        bar.set_message(name.clone());
        bar.suspend(|| info!("--- Processing: {name} ---"));

        let outcome = process_file(tools, config, path);

        bar.suspend(|| match &outcome {
            FileOutcome::Copied => info!("{} {name}", style("[COPY]").green()),
            FileOutcome::Encoded => info!("{} {name}", style("[ENCODE]").green()),
            FileOutcome::Skipped(reason) => {
                info!("{} {name}: {reason}", style("[SKIP]").yellow())
            }
        });
        bar.inc(1);
        summary.absorb(&outcome)
    });
    bar.finish_and_clear();

    info!(
        "Batch finished: {} file(s) attempted ({} copied, {} encoded, {} skipped)",
        summary.attempted, summary.copied, summary.encoded, summary.skipped
    );
    Ok(summary)
}
