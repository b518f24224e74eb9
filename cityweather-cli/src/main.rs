//! Binary crate for the `cityweather` terminal app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompts and routing between the two screens
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;
mod shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
