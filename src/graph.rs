//! Directed graph primitives used by the hypernym index.
//!
//! Vertices are dense integer ids `0..V-1`; edges are stored as a flat
//! per-vertex list of out-neighbours. Nothing here holds references between
//! vertices, so the structures are cheap to clone and share.

pub mod bfs;
pub mod cycle;
pub mod digraph;

pub use bfs::BreadthFirstPaths;
pub use cycle::DirectedCycle;
pub use digraph::Digraph;
