//! Main entry point for Gatecall.

use clap::Parser;
use gatecall::Cli;

fn main() -> anyhow::Result<()> {
    gatecall::run(Cli::parse())
}
