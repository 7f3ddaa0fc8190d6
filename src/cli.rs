// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `ticktask`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ticktask",
    version,
    about = "Drive a timeline script as a frame-stepped task tree.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the timeline script (TOML).
    ///
    /// Default: `Ticktask.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Ticktask.toml")]
    pub script: String,

    /// Frame rate for the update loop (wall-clock deltas).
    #[arg(long, value_name = "FPS", default_value_t = 60)]
    pub fps: u32,

    /// Use a fixed delta (seconds) per frame instead of measured time.
    ///
    /// Makes runs deterministic regardless of scheduling jitter.
    #[arg(long, value_name = "SECONDS")]
    pub fixed_delta: Option<f64>,

    /// Stop after this many frames even if the timeline has not finished.
    #[arg(long, value_name = "N")]
    pub max_frames: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TICKTASK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the timeline, but don't run it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
