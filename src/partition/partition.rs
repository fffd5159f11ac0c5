use std::collections::VecDeque;
use std::fmt;

use anyhow::{Context, Result};

use crate::graph::PersonGraph;

/// Colors for the two sides of the partition.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Return the color opposite to `self`.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

/// Per-color totals produced by the two-coloring traversal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Partition {
    red: usize,
    blue: usize,
}

impl Partition {
    /// Size of the larger side.
    #[inline] pub fn larger(&self) -> usize { self.red.max(self.blue) }

    /// Size of the smaller side.
    #[inline] pub fn smaller(&self) -> usize { self.red.min(self.blue) }

    /// Total number of nodes reached by the traversal.
    #[inline] pub fn total(&self) -> usize { self.red + self.blue }
}

impl fmt::Display for Partition {
    /// Larger side first, per the output contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.larger(), self.smaller())
    }
}

/// Two-color the component containing the root and count each color.
///
/// Breadth-first walk from the first inserted node, painting every traversed
/// neighbor the opposite color of the current node. The assignment happens on
/// every edge traversal, not only on first visit, so a non-bipartite input
/// ends with a coloring that is simply inconsistent with the violating edge;
/// no error is raised. Nodes outside the root's component are not counted.
pub fn partition(graph: &PersonGraph) -> Result<Partition> {
    let root = graph.root().context("[partition] graph has no nodes")?;

    let mut colors: Vec<Color> = vec![Color::Red; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    visited[root] = true;

    let mut red = 0;
    let mut blue = 0;

    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        match colors[current] {
            Color::Red => red += 1,
            Color::Blue => blue += 1,
        }

        for neighbor in graph.neighbors(current) {
            colors[neighbor] = colors[current].opposite();

            // Mark before enqueueing so each node is enqueued exactly once.
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(Partition { red, blue })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PersonGraph;

    fn graph_from_edges(edges: &[(&str, &str)]) -> PersonGraph {
        let mut graph = PersonGraph::new();
        for &(a, b) in edges {
            let a = graph.get_or_create(a);
            let b = graph.get_or_create(b);
            graph.add_edge(a, b);
        }
        graph
    }

    fn sizes_of(edges: &[(&str, &str)]) -> (usize, usize) {
        let sizes = partition(&graph_from_edges(edges)).unwrap();
        (sizes.larger(), sizes.smaller())
    }

    #[test]
    fn single_node_no_edges() {
        let mut graph = PersonGraph::new();
        graph.get_or_create("alice");

        let sizes = partition(&graph).unwrap();
        assert_eq!((sizes.larger(), sizes.smaller()), (1, 0));
        assert_eq!(sizes.to_string(), "1 0");
    }

    #[test]
    fn one_mutual_edge() {
        assert_eq!(sizes_of(&[("alice", "bob")]), (1, 1));
    }

    #[test]
    fn path_of_three() {
        // alice and carol land on the same side, bob on the other.
        assert_eq!(sizes_of(&[("alice", "bob"), ("bob", "carol")]), (2, 1));
    }

    #[test]
    fn four_cycle() {
        assert_eq!(sizes_of(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]), (2, 2));
    }

    #[test]
    fn star_puts_the_hub_alone() {
        assert_eq!(sizes_of(&[("hub", "a"), ("hub", "b"), ("hub", "c")]), (3, 1));
    }

    // Odd cycles are not bipartite. The traversal does not detect this: it
    // keeps overwriting colors, terminates, and reports some pair summing to
    // the component size. Known gap, kept deliberately.
    #[test]
    fn triangle_terminates_without_detection() {
        let sizes = partition(&graph_from_edges(&[("a", "b"), ("b", "c"), ("c", "a")])).unwrap();
        assert_eq!(sizes.total(), 3);
    }

    #[test]
    fn counts_sum_to_reachable_nodes() {
        let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("b", "e")]);
        let sizes = partition(&graph).unwrap();
        assert_eq!(sizes.total(), graph.node_count());
    }

    #[test]
    fn result_does_not_depend_on_insertion_order() {
        // Same path graph, three different roots.
        assert_eq!(sizes_of(&[("a", "b"), ("b", "c")]), (2, 1));
        assert_eq!(sizes_of(&[("c", "b"), ("b", "a")]), (2, 1));
        assert_eq!(sizes_of(&[("b", "a"), ("b", "c")]), (2, 1));
    }

    #[test]
    fn partition_is_idempotent() {
        let graph = graph_from_edges(&[("a", "b"), ("b", "c"), ("c", "d")]);
        let first = partition(&graph).unwrap();
        let second = partition(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_edges_do_not_change_counts() {
        assert_eq!(sizes_of(&[("a", "b"), ("a", "b"), ("b", "a")]), (1, 1));
    }

    #[test]
    fn only_the_root_component_is_counted() {
        let sizes = partition(&graph_from_edges(&[("a", "b"), ("x", "y")])).unwrap();
        assert_eq!(sizes.total(), 2);
    }

    #[test]
    fn empty_graph_is_an_error() {
        let graph = PersonGraph::new();
        assert!(partition(&graph).is_err());
    }
}
