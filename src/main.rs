use anyhow::Result;
use clap::Parser;

use liarliar::cli::{Cli, Commands};
use liarliar::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Partition(args) => commands::partition(&cli, args),
    }
}
