/*!
Graph traversal algorithms.

This module provides generic lazy traversal iterators (BFS and DFS) and a
high-level [`Traversal`] trait that exposes them directly as methods on
graph data structures. Both traversals are deterministic: neighbors are
expanded in adjacency-list (insertion) order, so a fixed insertion history
always yields the same visit sequence.
*/

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::{error::Result, node::*, ops::*};

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the "to be visited" nodes during a traversal.
/// The implementation determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node
    fn init(u: Node) -> Self;

    /// Removes and returns the next node from the frontier
    fn pop(&mut self) -> Option<Node>;

    /// Pushes the neighbors of the node just expanded into the frontier.
    /// Implementations choose the internal order such that the neighbor
    /// inserted first into the adjacency list is also expanded first.
    fn push_neighbors(&mut self, neighbors: impl DoubleEndedIterator<Item = Node>);

    /// Returns the number of items currently in the frontier
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }

    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }

    fn push_neighbors(&mut self, neighbors: impl DoubleEndedIterator<Item = Node>) {
        self.extend(neighbors);
    }

    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }

    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }

    /// Reversed so that the first neighbor ends up on top of the stack
    fn push_neighbors(&mut self, neighbors: impl DoubleEndedIterator<Item = Node>) {
        self.extend(neighbors.rev());
    }

    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of discovered nodes and
/// a visited set. A node is marked visited when it is expanded, not when it
/// is discovered; combined with the reversed stack pushes this makes the
/// DFS order equal to that of the recursive formulation (pre-order,
/// descending into unvisited neighbors in adjacency-list order) while BFS
/// keeps the classic first-discovery order. A node can therefore sit in
/// the frontier more than once; stale entries are skipped on pop.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: FixedBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first pre-order from a given starting node.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` ** — [`Traversal::bfs`] and
    /// [`Traversal::dfs`] are the checked entry points.
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        Self {
            graph,
            visited: FixedBitSet::with_capacity(graph.len()),
            sequencer: S::init(start),
        }
    }

    /// Checks if a given node `u` has already been visited
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(u as usize)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.sequencer.pop()?;
            if self.visited.put(u as usize) {
                continue; // stale frontier entry
            }

            self.sequencer.push_neighbors(
                self.graph
                    .neighbors_of(u)
                    .filter(|&v| !self.visited.contains(v as usize)),
            );

            return Some(u);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.len() - self.visited.count_ones(..)))
    }
}

/// Provides traversal algorithms directly as methods on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start` in
    /// **breadth-first search (BFS) order**: `start` first, then neighbors
    /// in the order they appear in each adjacency list, never revisiting a
    /// node. Unreachable nodes are absent from the sequence.
    ///
    /// Fails with [`crate::GraphError::NodeOutOfRange`] if `start` is not
    /// a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use mtxgraph::{prelude::*, algo::*};
    ///
    /// let g = GraphStore::try_from_edges(4, [(0, 1), (0, 2), (1, 3)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// ```
    fn bfs(&self, start: Node) -> Result<Bfs<'_, Self>> {
        self.check_node(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Returns an iterator that traverses nodes reachable from `start` in
    /// **depth-first pre-order**, descending into unvisited neighbors in
    /// adjacency-list order. Unreachable nodes are absent from the
    /// sequence.
    ///
    /// Fails with [`crate::GraphError::NodeOutOfRange`] if `start` is not
    /// a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use mtxgraph::{prelude::*, algo::*};
    ///
    /// let g = GraphStore::try_from_edges(4, [(0, 1), (0, 2), (1, 3)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn dfs(&self, start: Node) -> Result<Dfs<'_, Self>> {
        self.check_node(start)?;
        Ok(Dfs::new(self, start))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repr::GraphStore, GraphError};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph =
            GraphStore::try_from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
                .unwrap();

        assert_eq!(
            graph.bfs(1).unwrap().collect_vec(),
            vec![1, 2, 0, 4, 5, 3]
        );
        assert_eq!(
            graph.bfs(5).unwrap().collect_vec(),
            vec![5, 0, 4, 1, 3, 2]
        );
    }

    #[test]
    fn dfs_order_matches_recursion() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph =
            GraphStore::try_from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]).unwrap();

        // recursion would visit: 1, first neighbor 2 (dead end), 0, 5, 4, 3
        assert_eq!(
            graph.dfs(1).unwrap().collect_vec(),
            vec![1, 2, 0, 5, 4, 3]
        );
        assert_eq!(
            graph.dfs(5).unwrap().collect_vec(),
            vec![5, 0, 1, 2, 4, 3]
        );
    }

    #[test]
    fn traversals_are_deterministic_per_insertion_history() {
        let graph =
            GraphStore::try_from_edges(4, [(0, 1), (0, 2), (1, 3)]).unwrap();

        assert_eq!(graph.bfs(0).unwrap().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), vec![0, 1, 3, 2]);

        // flipping the insertion order of the first two edges flips the orders
        let graph =
            GraphStore::try_from_edges(4, [(0, 2), (0, 1), (1, 3)]).unwrap();

        assert_eq!(graph.bfs(0).unwrap().collect_vec(), vec![0, 2, 1, 3]);
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn unreachable_nodes_are_absent() {
        let graph = GraphStore::try_from_edges(4, [(0, 1)]).unwrap();

        assert_eq!(graph.bfs(0).unwrap().collect_vec(), vec![0, 1]);
        assert_eq!(graph.dfs(2).unwrap().collect_vec(), vec![2]);
    }

    #[test]
    fn invalid_start_is_rejected() {
        let graph = GraphStore::new(3);

        assert!(matches!(
            graph.bfs(3),
            Err(GraphError::NodeOutOfRange { node: 3, .. })
        ));
        assert!(matches!(
            graph.dfs(7),
            Err(GraphError::NodeOutOfRange { node: 7, .. })
        ));

        let empty = GraphStore::new(0);
        assert!(empty.bfs(0).is_err());
    }

    #[test]
    fn every_reachable_node_exactly_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [10 as NumNodes, 30] {
            let edges = (0..(n * 3))
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                .collect_vec();
            let graph = GraphStore::try_from_edges(n, edges).unwrap();

            let bfs = graph.bfs(0).unwrap().collect_vec();
            let dfs = graph.dfs(0).unwrap().collect_vec();

            assert!(bfs.iter().all_unique());
            assert!(dfs.iter().all_unique());

            // both traversals cover the exact same component
            assert_eq!(
                bfs.iter().sorted().collect_vec(),
                dfs.iter().sorted().collect_vec()
            );
        }
    }
}
