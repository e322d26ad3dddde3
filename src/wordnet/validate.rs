//! Structural checks on the hypernym graph.
//!
//! Two separate one-time passes run at construction: an out-degree census for
//! rootedness, then cycle detection.

use crate::error::{Result, WordNetError};
use crate::graph::cycle::DirectedCycle;
use crate::graph::digraph::Digraph;

/// Check that exactly one vertex has out-degree zero and return it.
pub fn single_root(graph: &Digraph) -> Result<usize> {
    match graph.roots().as_slice() {
        [root] => Ok(*root),
        roots => Err(WordNetError::NotRooted { roots: roots.len() }),
    }
}

/// Check that the graph has no directed cycle.
pub fn acyclic(graph: &Digraph) -> Result<()> {
    match DirectedCycle::new(graph).cycle() {
        Some(cycle) => Err(WordNetError::Cycle {
            cycle: cycle.to_vec(),
        }),
        None => Ok(()),
    }
}

/// Check that the graph is a rooted DAG and return its root.
pub fn rooted_dag(graph: &Digraph) -> Result<usize> {
    let root = single_root(graph)?;
    acyclic(graph)?;
    Ok(root)
}
