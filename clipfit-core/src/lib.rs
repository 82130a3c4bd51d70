//! Core library for batch-normalizing short-form video files to a vertical
//! ad-submission profile using external ffmpeg and ffprobe processes.
//!
//! This crate provides video file discovery, metadata probing with
//! defensive output handling, conformance classification, scale/crop
//! geometry planning, and the sequential batch orchestration. The decision
//! logic is pure and unit-testable; everything that touches a real media
//! file lives behind the process boundaries in [`external`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clipfit_core::{CoreConfig, ToolPaths};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/path/to/input"), PathBuf::from("/path/to/output"));
//! config.validate().unwrap();
//!
//! let tools = ToolPaths::resolve();
//! let files = clipfit_core::find_processable_files(&config.input_dir).unwrap();
//! let summary = clipfit_core::process_videos(&tools, &config, &files).unwrap();
//! println!("attempted {} file(s)", summary.attempted);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, TargetPolicy};
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::ToolPaths;
pub use media::VideoProbe;
pub use processing::{process_videos, BatchSummary, FileOutcome};
pub use utils::format_bytes;
