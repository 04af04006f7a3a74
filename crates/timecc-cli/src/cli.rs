//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Per-project build timing report.
///
/// Reads a directory of per-file timing measurements written by a build
/// wrapper and prints per-project compile-time totals, slowest last.
#[derive(Debug, Parser)]
#[command(name = "timecc", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the timing files.
    pub dir: PathBuf,

    /// Output the report as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
