use anyhow::Result;

use crate::cli::{Cli, PartitionArgs};
use crate::io::read_accusations;

pub fn partition(cli: &Cli, args: &PartitionArgs) -> Result<()> {
    if cli.verbose > 0 {
        eprintln!("[partition] input={}", args.input.display());
    }

    let ingest = read_accusations(&args.input)?;

    if ingest.truncated {
        eprintln!("[partition] warning: input ended on a read error, partitioning the partial graph");
    }
    if cli.verbose > 0 {
        eprintln!(
            "[partition] nodes={} edges={}",
            ingest.graph.node_count(),
            ingest.graph.edge_count()
        );
    }

    let sizes = crate::partition::partition(&ingest.graph)?;
    println!("{sizes}");

    Ok(())
}
