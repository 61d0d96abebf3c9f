/*!
`mtxgraph` builds in-memory graphs from sparse-matrix coordinate files and
provides structural queries, traversals and a raster rendering of the result.

# Representation

**Nodes** are `u32` values in the range `0..n` where `n` is fixed at
construction time. **Edges** are unordered pairs stored as the tuple-struct
`Edge(Node, Node)`; the edge list keeps an [`EdgeRecord`] per inserted pair,
which is either plain or carries a numeric weight.

The single graph representation, [`repr::GraphStore`], maintains three views
in lockstep: insertion-ordered adjacency lists, an `n × n` boolean adjacency
matrix for O(1) pair lookups, and the append-only edge list. Edge insertion
is idempotent; inserting a pair twice leaves the store unchanged.

# Design

Graph operations are exposed as traits ([`ops`]) implemented on the
representation, so algorithms are written once against the trait seams:

- [`algo::Traversal`] provides `graph.bfs(start)` / `graph.dfs(start)` as
  lazy iterators with deterministic, insertion-ordered visit order,
- [`algo::StructuralAnalysis`] provides connectivity, orientation and cycle
  queries as well as a textual summary,
- [`io`] reads the Matrix-Market coordinate format,
- [`render`] computes a collision-avoiding random layout and draws the
  graph to a PNG image.

# Usage

In most use-cases, `use mtxgraph::{prelude::*, algo::*};` suffices.

```
use mtxgraph::{prelude::*, algo::*};

let graph = GraphStore::try_from_edges(4, [(0, 1), (0, 2), (1, 3)]).unwrap();

assert!(graph.is_connected());
assert!(!graph.contains_cycle());
assert_eq!(graph.bfs(0).unwrap().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod render;
pub mod repr;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `mtxgraph::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
