//! Best-effort reader for the accusation input format.
//!
//! A header line carries a person count (capacity hint only), followed by
//! alternating `"<name> <k>"` accuser lines and `k` lines each naming one
//! accused person. Malformed lines are skipped and a mid-stream read error
//! ends ingestion with whatever graph was built so far.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::{Context, Result};

use crate::graph::PersonGraph;

/// Result of ingesting an accusation file.
#[derive(Debug)]
pub struct Ingest {
    /// Graph built from every record read before the stream ended.
    pub graph: PersonGraph,
    /// True if ingestion stopped on a read error rather than end of input.
    pub truncated: bool,
}

/// Read an accusation file into a `PersonGraph`.
///
/// Only failure to open the file is an error; everything after the open is
/// best-effort, per the ingestion contract.
pub fn read_accusations(path: &Path) -> Result<Ingest> {
    let file = File::open(path)
        .with_context(|| format!("[io::read] Failed to open input file: {}", path.display()))?;
    Ok(ingest(BufReader::new(file).lines()))
}

/// Read accusations from an in-memory string.
pub fn read_accusations_str(input: &str) -> Ingest {
    ingest(input.as_bytes().lines())
}

fn ingest<B: BufRead>(mut lines: Lines<B>) -> Ingest {
    // Header: person count, used only to size the graph up front.
    let hint = match lines.next() {
        Some(Ok(line)) => line.trim().parse::<usize>().unwrap_or(0),
        Some(Err(_)) => return Ingest { graph: PersonGraph::new(), truncated: true },
        None => 0,
    };

    let mut graph = PersonGraph::with_capacity(hint);
    let mut truncated = false;

    'records: while let Some(line) = lines.next() {
        let line = match line {
            Ok(line) => line,
            Err(_) => {
                truncated = true;
                break;
            }
        };

        // Accuser lines have exactly two tokens: a name and an accusation
        // count. Anything else is skipped silently.
        let mut tokens = line.split_whitespace();
        let (Some(name), Some(count), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            continue;
        };
        let Ok(count) = count.parse::<usize>() else { continue };

        let accuser = graph.get_or_create(name);
        for _ in 0..count {
            let accused = match lines.next() {
                Some(Ok(line)) => graph.get_or_create(line.trim()),
                Some(Err(_)) => {
                    truncated = true;
                    break 'records;
                }
                None => break 'records, // record list cut short by EOF
            };
            graph.add_edge(accuser, accused);
        }
    }

    Ingest { graph, truncated }
}
