mod partition;

pub use partition::{Color, Partition, partition};
