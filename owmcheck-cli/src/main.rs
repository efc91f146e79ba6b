//! Binary crate for the `owmcheck` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive credential configuration
//! - Printing the run report and mapping it to the process exit code

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
