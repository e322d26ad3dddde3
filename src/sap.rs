//! Shortest ancestral path (SAP) engine.
//!
//! An ancestral path between `v` and `w` is a pair of directed paths from `v`
//! and from `w` to a common ancestor `a`. The engine finds the shortest such
//! path with two breadth-first searches and a linear scan, memoizing
//! single-vertex queries by unordered pair.

pub mod ancestry;
pub mod cache;
pub mod engine;

pub use ancestry::Ancestry;
pub use cache::{CacheStats, PairKey, SapCache};
pub use engine::{Sap, SapConfig};
