#![doc = "LiarLiar public API"]
pub mod cli;
pub mod commands;
mod graph;
mod io;
mod partition;

#[doc(inline)]
pub use graph::{NodeId, PersonGraph};

#[doc(inline)]
pub use io::{Ingest, read_accusations, read_accusations_str};

#[doc(inline)]
pub use partition::{Color, Partition, partition};
