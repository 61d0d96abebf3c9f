/*!
Structural queries over a graph.

Everything in this module is a read-only probe of the stored structure:
connectivity is answered by a BFS from node 0, orientation by inspecting
the adjacency matrix for asymmetry, and cycle detection dispatches on the
orientation to either a parent-tracking DFS (undirected) or a three-color
DFS (directed). Both cycle searches use explicit stacks and scan every
component, not just the one containing node 0.
*/

use std::fmt::Write as _;

use fixedbitset::FixedBitSet;
use itertools::Itertools;

use super::traversal::Bfs;
use crate::{node::*, ops::*};

/// Per-node state of the directed cycle search. A node is `InProgress`
/// while its subtree is being expanded and `Done` afterwards; `Done`
/// nodes are never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Frame of the directed cycle search: expand a node, or retire it once
/// its whole subtree has been expanded.
enum Frame {
    Expand(Node),
    Retire(Node),
}

/// Structural queries: connectivity, orientation, cycle detection,
/// weighted-ness and a textual summary. Implemented for every graph
/// exposing adjacency, matrix and edge-list access.
pub trait StructuralAnalysis:
    AdjacencyList + AdjacencyTest + GraphEdgeOrder + EdgeStorage + Sized
{
    /// Returns *true* iff every node is reachable from node 0.
    ///
    /// Connectivity is always probed from node 0. A graph without nodes
    /// is trivially connected and short-circuits before the probe.
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        Bfs::new(self, 0).count() == self.len()
    }

    /// Returns *true* iff the adjacency matrix is asymmetric for at least
    /// one pair `(i, j)`.
    ///
    /// This is a structural probe over the matrix, not a tracked flag.
    /// [`GraphEdgeInsertion::try_add_edge`] always writes symmetrically,
    /// so only the arc producer can make this *true*.
    fn is_directed(&self) -> bool {
        self.vertices()
            .tuple_combinations()
            .any(|(i, j)| self.has_edge(i, j) != self.has_edge(j, i))
    }

    /// Returns *true* iff the graph contains a cycle, picking the
    /// algorithm matching the orientation of the stored matrix.
    fn contains_cycle(&self) -> bool {
        if self.is_directed() {
            self.contains_directed_cycle()
        } else {
            self.contains_undirected_cycle()
        }
    }

    /// Back-edge search over every component: a DFS from each unvisited
    /// root tracks the immediate parent of every node; meeting a visited
    /// neighbor that is not the parent closes a cycle. A self-loop is a
    /// cycle (the node meets itself, and it is never its own parent).
    fn contains_undirected_cycle(&self) -> bool {
        let mut visited = FixedBitSet::with_capacity(self.len());
        let mut stack: Vec<(Node, Node)> = Vec::new();

        for root in self.vertices() {
            if visited.contains(root as usize) {
                continue;
            }
            stack.push((root, INVALID_NODE));

            while let Some((u, parent)) = stack.pop() {
                if visited.put(u as usize) {
                    continue;
                }
                for v in self.neighbors_of(u) {
                    if !visited.contains(v as usize) {
                        stack.push((v, u));
                    } else if v != parent {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Three-color search over every node: an arc into an `InProgress`
    /// node closes a cycle, arcs into `Done` nodes are safe. A node is
    /// retired to `Done` only after its whole subtree has been expanded
    /// without finding a cycle.
    fn contains_directed_cycle(&self) -> bool {
        let mut state = vec![VisitState::Unvisited; self.len()];
        let mut stack: Vec<Frame> = Vec::new();

        for root in self.vertices() {
            if state[root as usize] != VisitState::Unvisited {
                continue;
            }
            stack.push(Frame::Expand(root));

            while let Some(frame) = stack.pop() {
                match frame {
                    Frame::Expand(u) => {
                        if state[u as usize] != VisitState::Unvisited {
                            continue;
                        }
                        state[u as usize] = VisitState::InProgress;
                        stack.push(Frame::Retire(u));

                        for v in self.neighbors_of(u) {
                            match state[v as usize] {
                                VisitState::InProgress => return true,
                                VisitState::Unvisited => stack.push(Frame::Expand(v)),
                                VisitState::Done => {}
                            }
                        }
                    }
                    Frame::Retire(u) => state[u as usize] = VisitState::Done,
                }
            }
        }

        false
    }

    /// Returns *true* iff any edge of the graph carries a weight
    fn has_weighted_edges(&self) -> bool {
        self.edge_records().iter().any(|r| r.is_weighted())
    }

    /// Renders a multi-line, human-readable summary of the graph: order,
    /// size, connectivity, orientation and weighted-ness.
    fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "graph of order {} and size {}",
            self.number_of_nodes(),
            self.number_of_edges()
        );
        let _ = writeln!(
            out,
            "connected: {}",
            if self.is_connected() { "yes" } else { "no" }
        );
        let _ = writeln!(
            out,
            "orientation: {}",
            if self.is_directed() {
                "directed"
            } else {
                "undirected"
            }
        );
        let _ = write!(
            out,
            "weighted: {}",
            if self.has_weighted_edges() { "yes" } else { "no" }
        );
        out
    }
}

impl<G> StructuralAnalysis for G where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + EdgeStorage + Sized
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::GraphStore;

    fn undirected(n: NumNodes, edges: &[(Node, Node)]) -> GraphStore {
        GraphStore::try_from_edges(n, edges.iter().copied()).unwrap()
    }

    fn directed(n: NumNodes, arcs: &[(Node, Node)]) -> GraphStore {
        let mut graph = GraphStore::new(n);
        for &(u, v) in arcs {
            graph.try_add_arc(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn connectivity() {
        // a graph without nodes is trivially connected
        assert!(GraphStore::new(0).is_connected());
        assert!(GraphStore::new(1).is_connected());
        assert!(!GraphStore::new(3).is_connected());

        assert!(undirected(4, &[(0, 1), (0, 2), (1, 3)]).is_connected());
        assert!(!undirected(4, &[(0, 1), (2, 3)]).is_connected());
    }

    #[test]
    fn orientation_is_a_matrix_probe() {
        let mut graph = undirected(3, &[(0, 1), (1, 2)]);
        // symmetric insertion can never make the matrix asymmetric
        assert!(!graph.is_directed());

        graph.try_add_arc(0, 2).unwrap();
        assert!(graph.is_directed());

        // the reciprocal arc restores symmetry
        graph.try_add_arc(2, 0).unwrap();
        assert!(!graph.is_directed());
    }

    #[test]
    fn undirected_cycles() {
        // triangle vs. path
        assert!(undirected(3, &[(0, 1), (1, 2), (2, 0)]).contains_cycle());
        assert!(!undirected(3, &[(0, 1), (1, 2)]).contains_cycle());

        // trees are acyclic
        assert!(!undirected(5, &[(0, 1), (0, 2), (1, 3), (1, 4)]).contains_cycle());

        // four-cycle closed over two branches
        assert!(undirected(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).contains_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut graph = GraphStore::new(2);
        graph.try_add_edge(0, 1).unwrap();
        assert!(!graph.contains_cycle());

        graph.try_add_edge(1, 1).unwrap();
        assert!(graph.contains_cycle());
    }

    #[test]
    fn cycles_in_any_component_are_found() {
        // the cycle lives in the component not containing node 0
        let graph = undirected(6, &[(0, 1), (2, 3), (3, 4), (4, 2)]);
        assert!(!graph.is_connected());
        assert!(graph.contains_cycle());
    }

    #[test]
    fn directed_cycles() {
        let graph = directed(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(graph.is_directed());
        assert!(graph.contains_cycle());

        // a DAG with the same underlying edges has none
        let dag = directed(3, &[(0, 1), (0, 2), (1, 2)]);
        assert!(dag.is_directed());
        assert!(!dag.contains_cycle());
    }

    #[test]
    fn directed_cycle_beyond_the_first_component() {
        let graph = directed(5, &[(0, 1), (2, 3), (3, 4), (4, 2)]);
        assert!(graph.contains_cycle());
    }

    #[test]
    fn two_cycle_between_reciprocal_arcs_is_undirected() {
        // reciprocal arcs are indistinguishable from one undirected edge,
        // so the parent rule does not flag them
        let graph = directed(2, &[(0, 1), (1, 0)]);
        assert!(!graph.is_directed());
        assert!(!graph.contains_cycle());
    }

    #[test]
    fn weighted_edges_are_detected() {
        let mut graph = GraphStore::new(3);
        graph.try_add_edge(0, 1).unwrap();
        assert!(!graph.has_weighted_edges());

        graph.try_add_weighted_edge(1, 2, 0.5).unwrap();
        assert!(graph.has_weighted_edges());
    }

    #[test]
    fn describe_reports_all_facts() {
        let mut graph = undirected(3, &[(0, 1), (1, 2), (2, 0)]);
        graph.try_add_weighted_edge(0, 0, 1.0).unwrap();

        let report = graph.describe();
        assert!(report.contains("order 3"));
        assert!(report.contains("size 4"));
        assert!(report.contains("connected: yes"));
        assert!(report.contains("orientation: undirected"));
        assert!(report.contains("weighted: yes"));

        let report = GraphStore::new(2).describe();
        assert!(report.contains("connected: no"));
        assert!(report.contains("weighted: no"));
    }
}
