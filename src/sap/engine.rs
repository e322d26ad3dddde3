//! The SAP query engine.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::bfs::BreadthFirstPaths;
use crate::graph::digraph::Digraph;
use crate::sap::ancestry::Ancestry;
use crate::sap::cache::{CacheStats, PairKey, SapCache};

/// Configuration for the SAP engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SapConfig {
    /// Whether single-vertex queries are memoized.
    pub cache_enabled: bool,
}

impl Default for SapConfig {
    fn default() -> Self {
        SapConfig {
            cache_enabled: true,
        }
    }
}

/// Shortest ancestral path queries over an immutable digraph.
///
/// The graph does not have to be a DAG; when no vertex is reachable from both
/// sides the queries return `-1` rather than failing.
///
/// # Examples
///
/// ```
/// use wordnet::graph::Digraph;
/// use wordnet::sap::Sap;
///
/// // 0 -> 2 <- 1, 2 -> 3
/// let graph = Digraph::from_edges(4, [(0, 2), (1, 2), (2, 3)]).unwrap();
/// let sap = Sap::new(graph);
///
/// assert_eq!(sap.length(0, 1).unwrap(), 2);
/// assert_eq!(sap.ancestor(0, 1).unwrap(), 2);
/// ```
#[derive(Debug)]
pub struct Sap {
    graph: Digraph,
    config: SapConfig,
    cache: SapCache,
}

impl Sap {
    /// Create an engine with the default configuration.
    pub fn new(graph: Digraph) -> Self {
        Self::with_config(graph, SapConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(graph: Digraph, config: SapConfig) -> Self {
        debug!(
            "SAP engine over {} vertices and {} edges (cache {})",
            graph.vertex_count(),
            graph.edge_count(),
            if config.cache_enabled { "on" } else { "off" }
        );
        Sap {
            graph,
            config,
            cache: SapCache::new(),
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// The engine configuration.
    pub fn config(&self) -> &SapConfig {
        &self.config
    }

    /// Length of a shortest ancestral path between `v` and `w`, or `-1`.
    pub fn length(&self, v: usize, w: usize) -> Result<i64> {
        Ok(self.ancestry(v, w)?.length)
    }

    /// A common ancestor on a shortest ancestral path between `v` and `w`, or `-1`.
    pub fn ancestor(&self, v: usize, w: usize) -> Result<i64> {
        Ok(self.ancestry(v, w)?.ancestor)
    }

    /// Length and ancestor for a single pair, served from the cache when possible.
    pub fn ancestry(&self, v: usize, w: usize) -> Result<Ancestry> {
        self.graph.validate_vertex(v)?;
        self.graph.validate_vertex(w)?;

        if v == w {
            return Ok(Ancestry::identity(v));
        }
        if !self.config.cache_enabled {
            return Ok(self.compute_pair(v, w));
        }

        let key = PairKey::new(v, w);
        if let Some(result) = self.cache.get(key) {
            trace!("SAP cache hit for ({v}, {w})");
            return Ok(result);
        }

        trace!("SAP cache miss for ({v}, {w})");
        let result = self.compute_pair(key.low(), key.high());
        self.cache.insert(key, result);
        Ok(result)
    }

    /// Length of a shortest ancestral path between any vertex of `vs` and any
    /// vertex of `ws`, or `-1`.
    pub fn length_sets(&self, vs: &[usize], ws: &[usize]) -> Result<i64> {
        Ok(self.ancestry_sets(vs, ws)?.length)
    }

    /// A common ancestor on a shortest ancestral path between the two sets, or `-1`.
    pub fn ancestor_sets(&self, vs: &[usize], ws: &[usize]) -> Result<i64> {
        Ok(self.ancestry_sets(vs, ws)?.ancestor)
    }

    /// Length and ancestor for two vertex sets. Never cached.
    ///
    /// An empty set on either side yields [`Ancestry::NONE`] without looking
    /// at the other set; otherwise every element of both sets is validated.
    pub fn ancestry_sets(&self, vs: &[usize], ws: &[usize]) -> Result<Ancestry> {
        if vs.is_empty() || ws.is_empty() {
            return Ok(Ancestry::NONE);
        }
        for &v in vs.iter().chain(ws) {
            self.graph.validate_vertex(v)?;
        }

        let from_v = BreadthFirstPaths::from_sources(&self.graph, vs);
        let from_w = BreadthFirstPaths::from_sources(&self.graph, ws);
        Ok(Ancestry::scan(self.graph.vertex_count(), &from_v, &from_w))
    }

    /// Cache counters for single-vertex queries.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Forget every memoized pair.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn compute_pair(&self, v: usize, w: usize) -> Ancestry {
        let from_v = BreadthFirstPaths::new(&self.graph, v);
        let from_w = BreadthFirstPaths::new(&self.graph, w);
        Ancestry::scan(self.graph.vertex_count(), &from_v, &from_w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 -> 3 -> 5
    // 2 -> 3, 4 -> 5
    fn small() -> Sap {
        let graph =
            Digraph::from_edges(6, [(0, 1), (1, 3), (2, 3), (3, 5), (4, 5)]).unwrap();
        Sap::new(graph)
    }

    #[test]
    fn test_single_pair() {
        let sap = small();
        assert_eq!(sap.length(0, 2).unwrap(), 3);
        assert_eq!(sap.ancestor(0, 2).unwrap(), 3);
        assert_eq!(sap.length(0, 4).unwrap(), 4);
        assert_eq!(sap.ancestor(0, 4).unwrap(), 5);
    }

    #[test]
    fn test_identity() {
        let sap = small();
        for v in 0..6 {
            assert_eq!(sap.length(v, v).unwrap(), 0);
            assert_eq!(sap.ancestor(v, v).unwrap(), v as i64);
        }
    }

    #[test]
    fn test_ancestor_on_path() {
        // v is itself an ancestor of w
        let sap = small();
        assert_eq!(sap.length(0, 3).unwrap(), 2);
        assert_eq!(sap.ancestor(0, 3).unwrap(), 3);
    }

    #[test]
    fn test_invalid_vertex() {
        let sap = small();
        assert!(sap.length(0, 6).unwrap_err().is_invalid_argument());
        assert!(sap.ancestor(6, 0).unwrap_err().is_invalid_argument());
        assert_eq!(sap.cache_stats().entries, 0);
    }

    #[test]
    fn test_cache_is_symmetric() {
        let sap = small();
        let first = sap.ancestry(0, 4).unwrap();
        let second = sap.ancestry(4, 0).unwrap();

        assert_eq!(first, second);
        let stats = sap.cache_stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_identity_bypasses_cache() {
        let sap = small();
        sap.ancestry(2, 2).unwrap();
        assert_eq!(sap.cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_cache_disabled() {
        let graph = Digraph::from_edges(3, [(0, 2), (1, 2)]).unwrap();
        let sap = Sap::with_config(
            graph,
            SapConfig {
                cache_enabled: false,
            },
        );

        assert_eq!(sap.length(0, 1).unwrap(), 2);
        assert_eq!(sap.length(1, 0).unwrap(), 2);
        assert_eq!(sap.cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_sets() {
        let sap = small();
        assert_eq!(sap.length_sets(&[0, 2], &[4]).unwrap(), 3);
        assert_eq!(sap.ancestor_sets(&[0, 2], &[4]).unwrap(), 5);
        assert_eq!(sap.length_sets(&[0], &[2, 1]).unwrap(), 1);
        assert_eq!(sap.ancestor_sets(&[0], &[2, 1]).unwrap(), 1);
        assert_eq!(sap.cache_stats().entries, 0);
    }

    #[test]
    fn test_empty_sets() {
        let sap = small();
        assert_eq!(sap.ancestry_sets(&[], &[1]).unwrap(), Ancestry::NONE);
        assert_eq!(sap.ancestry_sets(&[1], &[]).unwrap(), Ancestry::NONE);
        assert_eq!(sap.length_sets(&[], &[99]).unwrap(), -1);
        assert_eq!(sap.ancestor_sets(&[99], &[]).unwrap(), -1);
    }

    #[test]
    fn test_set_elements_validated() {
        let sap = small();
        assert!(sap.length_sets(&[0, 42], &[1]).unwrap_err().is_invalid_argument());
        assert!(sap.ancestor_sets(&[1], &[42]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_no_common_ancestor() {
        let graph = Digraph::from_edges(4, [(0, 1), (2, 3)]).unwrap();
        let sap = Sap::new(graph);
        assert_eq!(sap.length(0, 2).unwrap(), -1);
        assert_eq!(sap.ancestor(0, 2).unwrap(), -1);
        assert_eq!(sap.length_sets(&[0, 1], &[2, 3]).unwrap(), -1);
    }

    #[test]
    fn test_cyclic_graph() {
        // 0 -> 1 -> 2 -> 0, 3 -> 2
        let graph = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (3, 2)]).unwrap();
        let sap = Sap::new(graph);
        assert_eq!(sap.length(1, 3).unwrap(), 1);
        assert_eq!(sap.ancestor(1, 3).unwrap(), 2);
    }
}
