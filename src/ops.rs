use std::ops::Range;

use crate::{edge::*, error::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over V
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns `u` unchanged if it is a node of the graph and
    /// [`GraphError::NodeOutOfRange`] otherwise
    fn check_node(&self, u: Node) -> Result<Node> {
        if u < self.number_of_nodes() {
            Ok(u)
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                num_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex
    /// in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the entry `(u, v)` of the adjacency matrix is set.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if both entries `(u, v)` and `(v, u)` are set.
    /// For graphs built through symmetric insertion this is equivalent
    /// to [`AdjacencyTest::has_edge`].
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Access to the append-only edge list of a graph
pub trait EdgeStorage {
    /// Returns all edge records in insertion order
    fn edge_records(&self) -> &[EdgeRecord];
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Fallible, idempotent edge insertion.
///
/// Edges are append-only: once inserted they are never removed or
/// mutated. All insertion methods perform the membership check before
/// any write, so a failed call commits no partial mutation.
pub trait GraphEdgeInsertion: GraphNew {
    /// Adds the undirected edge `{u, v}` to the graph. Both neighbor
    /// lists and both matrix entries are written. Returns `Ok(true)`
    /// exactly if the pair was not present previously; re-inserting a
    /// present pair is a no-op returning `Ok(false)`. Self-loops are
    /// permitted and produce a single adjacency entry.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Like [`GraphEdgeInsertion::try_add_edge`] but the inserted edge
    /// carries the weight `w`
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<bool>;

    /// Adds the directed arc `(u, v)`: only `u`'s neighbor list and the
    /// matrix entry `(u, v)` are written. This is the one producer of
    /// asymmetric adjacency; idempotent on the ordered pair.
    fn try_add_arc(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds all edges in the collection
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromEdges: Sized {
    /// Creates a graph from a number of nodes and an iterator over edges
    fn try_from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>)
        -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeInsertion> GraphFromEdges for G {
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}
