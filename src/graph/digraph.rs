//! Adjacency-list directed graph.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};

/// A directed graph over the vertices `0..V-1`.
///
/// Edges are kept in insertion order per vertex. Parallel edges and self
/// loops are allowed; validation of structural properties (rootedness,
/// acyclicity) happens in the callers that need it.
///
/// Deserialization goes through [`Digraph::add_edge`], so a decoded graph
/// never holds an endpoint outside `0..V`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DigraphData")]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

/// Serialized form of a [`Digraph`], checked before use.
#[derive(Deserialize)]
struct DigraphData {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl TryFrom<DigraphData> for Digraph {
    type Error = WordNetError;

    fn try_from(data: DigraphData) -> Result<Self> {
        let mut graph = Digraph::new(data.adj.len());
        for (v, neighbours) in data.adj.into_iter().enumerate() {
            for w in neighbours {
                graph.add_edge(v, w)?;
            }
        }
        if graph.edge_count != data.edge_count {
            return Err(WordNetError::invalid_argument(format!(
                "edge count {} does not match the {} edges listed",
                data.edge_count, graph.edge_count
            )));
        }
        Ok(graph)
    }
}

impl Digraph {
    /// Create an empty graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Digraph {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list, validating every endpoint.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Digraph::new(vertex_count);
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the directed edge `v -> w`.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.adj[v].push(w);
        self.edge_count += 1;
        Ok(())
    }

    /// Out-neighbours of `v`. Panics if `v` is out of range.
    pub fn adj(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Number of edges leaving `v`. Panics if `v` is out of range.
    pub fn out_degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Whether `v` names a vertex of this graph.
    pub fn contains(&self, v: usize) -> bool {
        v < self.adj.len()
    }

    /// Fail with an invalid-argument error unless `v` is in `0..V`.
    pub fn validate_vertex(&self, v: usize) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(WordNetError::invalid_argument(format!(
                "vertex {v} is not between 0 and {}",
                self.adj.len().saturating_sub(1)
            )))
        }
    }

    /// Vertices with no outgoing edges, in ascending order.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.adj.len())
            .filter(|&v| self.adj[v].is_empty())
            .collect()
    }

    /// The same graph with every edge reversed.
    pub fn reverse(&self) -> Digraph {
        let mut reversed = Digraph::new(self.vertex_count());
        for (v, neighbours) in self.adj.iter().enumerate() {
            for &w in neighbours {
                reversed.adj[w].push(v);
            }
        }
        reversed.edge_count = self.edge_count;
        reversed
    }
}
