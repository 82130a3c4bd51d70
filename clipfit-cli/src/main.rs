// clipfit-cli/src/main.rs
//
// Command-line entry point for clipfit. Responsibilities:
// - Parsing arguments (input/output directories, verbosity).
// - Falling back to native folder pickers when a directory is not given.
// - Initializing logging and printing the startup banner.
// - Driving clipfit-core discovery and batch processing.
// - Printing the final summary, plus a completion dialog when the
//   directories came from the interactive pickers.

mod logging;
mod terminal;

use anyhow::Context;
use clap::Parser;
use clipfit_core::{find_processable_files, process_videos, CoreConfig, ToolPaths};

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "clipfit: batch short-form video normalizer",
    long_about = "Normalizes short-form clips to 1080x1920 / 30 fps / 1000k for \
                  ad-platform submission. Conformant files are copied through \
                  untouched; everything else is scale-cropped and re-encoded."
)]
struct Cli {
    /// Directory containing the source clips (a folder picker opens when omitted)
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Directory for normalized output (a folder picker opens when omitted)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    terminal::print_banner();

    let interactive = cli.input_dir.is_none() || cli.output_dir.is_none();

    let input_dir = match resolve_dir(cli.input_dir, "Select the folder with source clips") {
        Some(dir) => dir,
        None => {
            println!("No input folder selected, exiting.");
            return ExitCode::SUCCESS;
        }
    };
    let output_dir = match resolve_dir(cli.output_dir, "Select the output folder") {
        Some(dir) => dir,
        None => {
            println!("No output folder selected, exiting.");
            return ExitCode::SUCCESS;
        }
    };

    match run(input_dir, output_dir, interactive) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            terminal::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Uses the given directory, or opens a native folder picker. `None`
/// means the picker was cancelled, which is a clean exit rather than an
/// error.
fn resolve_dir(arg: Option<PathBuf>, picker_title: &str) -> Option<PathBuf> {
    arg.or_else(|| rfd::FileDialog::new().set_title(picker_title).pick_folder())
}

fn run(input_dir: PathBuf, output_dir: PathBuf, interactive: bool) -> anyhow::Result<()> {
    println!("Input:  {}", input_dir.display());
    println!("Output: {}", output_dir.display());
    log::info!(
        "Run started: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let config = CoreConfig::new(input_dir, output_dir);
    config.validate().context("Input directory check failed")?;

    let files = find_processable_files(&config.input_dir)
        .context("Failed to scan the input directory")?;
    if files.is_empty() {
        terminal::print_nothing_to_do(&config.input_dir);
        if interactive {
            terminal::show_no_files_dialog();
        }
        return Ok(());
    }
    println!("Found {} video file(s) to process.", files.len());

    let tools = ToolPaths::resolve();
    let summary = process_videos(&tools, &config, &files).context("Batch setup failed")?;

    terminal::print_summary(&summary);
    if interactive {
        terminal::show_summary_dialog(summary.attempted);
    }
    log::info!(
        "Run finished: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_both_directories() {
        let cli = Cli::parse_from(["clipfit", "in_dir", "out_dir"]);
        assert_eq!(cli.input_dir, Some(PathBuf::from("in_dir")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out_dir")));
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_no_directories_falls_back_to_pickers() {
        let cli = Cli::parse_from(["clipfit"]);
        assert!(cli.input_dir.is_none());
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["clipfit", "-v", "in_dir", "out_dir"]);
        assert!(cli.verbose);
    }

    #[test]
    fn resolve_dir_prefers_the_argument() {
        let dir = resolve_dir(Some(PathBuf::from("given")), "unused title");
        assert_eq!(dir, Some(PathBuf::from("given")));
    }
}
