/*!
# Representation

The graph storage backend. In contrast to libraries that offer multiple
interchangeable representations, this crate keeps a single one,
[`GraphStore`], which pairs an adjacency array (for ordered neighbor
iteration) with an adjacency matrix (for O(1) pair lookups and the
orientation probe) and keeps both in lockstep on every insertion.
*/

mod store;

pub use store::*;
