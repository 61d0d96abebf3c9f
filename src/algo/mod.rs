/*!
Algorithms implemented on top of the graph operation traits.

- [`traversal`] provides lazy BFS/DFS iterators and the [`Traversal`]
  trait that exposes them directly as methods on graph data structures.
- [`structure`] provides the [`StructuralAnalysis`] trait: connectivity,
  orientation, cycle detection, weighted-ness and a textual summary.

All algorithms take a read-only reference to the graph and never mutate it.
*/

pub mod structure;
pub mod traversal;

pub use structure::*;
pub use traversal::*;
