use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Accusation-graph CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "liarliar", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split an accusation file into its two sides (sizes on stdout)
    Partition(PartitionArgs),
}

#[derive(Args, Debug)]
pub struct PartitionArgs {
    /// Input accusation file
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}
