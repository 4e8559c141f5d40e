//! TitleScout CLI — automated preliminary title search over public records.
//!
//! Resolves the chain of title for a property address, aggregates
//! encumbrances across historical owners, and prints a classified report.

mod commands;
mod render;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
