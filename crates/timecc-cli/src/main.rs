use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use timecc_cli::Cli;
use timecc_cli::commands::report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    report::run(&cli.dir, cli.json)
}
