//! Bhasha Mitra command line
//!
//! Runs the proofreading analysis against a plain text file standing in
//! for the live document.
//!
//! ```bash
//! bhasha config set-key <KEY>
//! bhasha check essay.txt --tone formal
//! bhasha fix essay.txt
//! ```

mod args;
mod commands;
mod console;
mod router;

use bhasha_core::error::BhashaResult;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;

#[tokio::main]
async fn main() -> BhashaResult<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose raises the default to debug
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bhasha_core={default_level},bhasha={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    router::route(cli).await
}
