use fixedbitset::FixedBitSet;

use crate::{edge::*, node::*, ops::*, Result};

/// The graph representation: insertion-ordered neighbor lists, an
/// `n × n` boolean adjacency matrix stored as one bitset row per node,
/// and the append-only list of edge records.
///
/// The node set is fixed at construction: ids `0..n` exist for the
/// lifetime of the store and nodes are never added or removed. All three
/// views are owned exclusively by the store and only change together,
/// inside a successful insertion.
#[derive(Clone, Debug)]
pub struct GraphStore {
    /// Per-node neighbor lists in insertion order
    nbs: Vec<Vec<Node>>,
    /// Bit `v` of row `u` encodes the matrix entry `(u, v)`
    matrix: Vec<FixedBitSet>,
    /// Every inserted edge in insertion order
    records: Vec<EdgeRecord>,
}

impl GraphNew for GraphStore {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            matrix: vec![FixedBitSet::with_capacity(n as usize); n as usize],
            records: Vec::new(),
        }
    }
}

impl GraphNodeOrder for GraphStore {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for GraphStore {
    fn number_of_edges(&self) -> NumEdges {
        self.records.len() as NumEdges
    }
}

impl AdjacencyList for GraphStore {
    fn neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for GraphStore {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix[u as usize].contains(v as usize)
    }
}

impl EdgeStorage for GraphStore {
    fn edge_records(&self) -> &[EdgeRecord] {
        &self.records
    }
}

impl GraphStore {
    /// Writes a checked, not-yet-present record into all three views.
    /// A self-loop produces a single adjacency entry.
    fn commit(&mut self, record: EdgeRecord) {
        let Edge(u, v) = record.endpoints();
        self.nbs[u as usize].push(v);
        self.matrix[u as usize].insert(v as usize);
        if u != v {
            self.nbs[v as usize].push(u);
            self.matrix[v as usize].insert(u as usize);
        }
        self.records.push(record);
    }
}

impl GraphEdgeInsertion for GraphStore {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if self.has_edge(u, v) {
            return Ok(false);
        }
        self.commit(EdgeRecord::Plain(Edge(u, v)));
        Ok(true)
    }

    fn try_add_weighted_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if self.has_edge(u, v) {
            return Ok(false);
        }
        self.commit(EdgeRecord::Weighted(Edge(u, v), w));
        Ok(true)
    }

    fn try_add_arc(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if self.has_edge(u, v) {
            return Ok(false);
        }
        self.nbs[u as usize].push(v);
        self.matrix[u as usize].insert(v as usize);
        self.records.push(EdgeRecord::Plain(Edge(u, v)));
        Ok(true)
    }
}
