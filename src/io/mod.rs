//! Accusation-file ingestion.

mod read;

pub use read::{Ingest, read_accusations, read_accusations_str};
