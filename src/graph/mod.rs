mod graph;

pub use graph::{NodeId, PersonGraph};
