use ahash::AHashMap;

/// Index of a node in a `PersonGraph`.
pub type NodeId = usize;

/// An undirected graph of people, deduplicated by name, in adjacency-list form.
///
/// Nodes are created on first mention. Edges are stored symmetrically:
/// `add_edge(a, b)` appends each endpoint to the other's list. The first node
/// ever created is remembered as the traversal root.
#[derive(Debug, Default)]
pub struct PersonGraph {
    names: Vec<String>,
    adjacency: Vec<Vec<NodeId>>,
    index: AHashMap<String, NodeId>,
    root: Option<NodeId>,
}

impl PersonGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph sized for `num_persons` nodes.
    ///
    /// The hint comes from the input header line and is not load-bearing;
    /// the graph grows past it freely.
    pub fn with_capacity(num_persons: usize) -> Self {
        Self {
            names: Vec::with_capacity(num_persons),
            adjacency: Vec::with_capacity(num_persons),
            index: AHashMap::with_capacity(num_persons),
            root: None,
        }
    }

    /// Get the number of nodes in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.names.len() }

    /// Get the number of undirected edges in the graph.
    ///
    /// Every edge is stored twice, once per endpoint.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|adj| adj.len()).sum::<usize>() / 2
    }

    /// Get the degree (number of adjacency entries) of a given node.
    #[inline] pub fn degree(&self, node: NodeId) -> usize { self.adjacency[node].len() }

    /// Get the name of a given node.
    #[inline] pub fn name(&self, node: NodeId) -> &str { &self.names[node] }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency[node].iter().copied()
    }

    /// Get the first node that was inserted, or `None` if the graph is empty.
    #[inline] pub fn root(&self) -> Option<NodeId> { self.root }

    /// Return the node for `name`, creating and registering it if absent.
    ///
    /// Idempotent: calling twice with the same name returns the same id.
    pub fn get_or_create(&mut self, name: &str) -> NodeId {
        if let Some(&node) = self.index.get(name) {
            return node;
        }

        let node = self.names.len();
        self.names.push(name.to_owned());
        self.adjacency.push(Vec::new());
        self.index.insert(name.to_owned(), node);
        self.root.get_or_insert(node);
        node
    }

    /// Record a mutual accusation between `a` and `b`.
    ///
    /// Self-loops and duplicate edges are not suppressed: redundant entries
    /// only cause repeated revisits during traversal, which the visited
    /// flags turn into no-ops.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        assert!(a < self.node_count() && b < self.node_count(),
            "node ids must be in range [0, {})", self.node_count());

        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }
}
