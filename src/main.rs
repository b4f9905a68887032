//! Command-line entry point for `descent`.

use descent::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    better_panic::install();

    // diagnostics share stderr with the log, so keep it quiet unless asked
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli: Cli = argh::from_env();
    cli.handle()
}
