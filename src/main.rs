//! CLI entry point for building and querying square lattice grids

use clap::Parser;
use squaregrid::io::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> squaregrid::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run(&mut std::io::stdout().lock())
}
