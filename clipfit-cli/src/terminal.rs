//! Terminal presentation: banner, summary lines, and native dialogs.

use clipfit_core::BatchSummary;
use console::style;

use std::path::Path;

/// Startup banner, in the spirit of the packaged desktop builds.
pub fn print_banner() {
    let lines = [
        "┌────────────────────────────────────────────┐",
        "│  clipfit - short-form video normalizer     │",
        "│                                            │",
        "│  1. pick the folder with source clips      │",
        "│  2. pick the output folder                 │",
        "│  3. wait for the batch to finish           │",
        "└────────────────────────────────────────────┘",
    ];
    for line in lines {
        println!("{}", style(line).cyan());
    }
}

pub fn print_nothing_to_do(input_dir: &Path) {
    println!(
        "{}",
        style(format!(
            "No video files found in {}. Nothing to do.",
            input_dir.display()
        ))
        .yellow()
    );
}

pub fn print_summary(summary: &BatchSummary) {
    println!("========================================");
    println!("{}", style("Batch Summary").bold());
    println!("  Attempted: {}", style(summary.attempted).bold());
    println!("  Copied:    {}", summary.copied);
    println!("  Encoded:   {}", summary.encoded);
    println!("  Skipped:   {}", summary.skipped);
    println!("========================================");
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), message);
}

/// Completion dialog, shown only when the directories came from the
/// interactive pickers.
pub fn show_summary_dialog(attempted: usize) {
    let _ = rfd::MessageDialog::new()
        .set_title("clipfit")
        .set_level(rfd::MessageLevel::Info)
        .set_description(format!(
            "All videos processed.\n{attempted} file(s) attempted."
        ))
        .show();
}

pub fn show_no_files_dialog() {
    let _ = rfd::MessageDialog::new()
        .set_title("clipfit")
        .set_level(rfd::MessageLevel::Info)
        .set_description("No video files were found in the input folder.")
        .show();
}
