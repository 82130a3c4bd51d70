//! Logger initialization for the CLI.

use log::Level;
use std::io::Write;

/// Initializes env_logger. `--verbose` raises the default level to debug;
/// an explicit `RUST_LOG` still wins.
///
/// Info-level lines print bare so the per-file progress output stays
/// clean; other levels keep a `[LEVEL]` prefix.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(buf, "[WARN] {}", record.args()),
            Level::Error => writeln!(buf, "[ERROR] {}", record.args()),
            level => writeln!(buf, "[{level}] {}", record.args()),
        })
        .init();
}
