//! Multi-source breadth-first search along forward edges.

use std::collections::VecDeque;

use bit_vec::BitVec;

use crate::graph::digraph::Digraph;

/// Shortest (edge-count) distances from a set of sources to every vertex
/// reachable from them.
///
/// Sources are assumed to be valid vertices of the graph; callers validate
/// before searching.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    marked: BitVec,
    dist_to: Vec<usize>,
}

impl BreadthFirstPaths {
    /// Search from a single source.
    pub fn new(graph: &Digraph, source: usize) -> Self {
        Self::from_sources(graph, &[source])
    }

    /// Search from every vertex in `sources` simultaneously.
    pub fn from_sources(graph: &Digraph, sources: &[usize]) -> Self {
        let vertex_count = graph.vertex_count();
        let mut marked = BitVec::from_elem(vertex_count, false);
        let mut dist_to = vec![usize::MAX; vertex_count];
        let mut queue = VecDeque::with_capacity(sources.len());

        for &s in sources {
            if !marked[s] {
                marked.set(s, true);
                dist_to[s] = 0;
                queue.push_back(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            for &w in graph.adj(v) {
                if !marked[w] {
                    marked.set(w, true);
                    dist_to[w] = dist_to[v] + 1;
                    queue.push_back(w);
                }
            }
        }

        BreadthFirstPaths { marked, dist_to }
    }

    /// Whether some source reaches `v`.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked.get(v).unwrap_or(false)
    }

    /// Distance from the nearest source to `v`, if reachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        if self.has_path_to(v) {
            Some(self.dist_to[v])
        } else {
            None
        }
    }

    /// Number of vertices reached, sources included.
    pub fn reached(&self) -> usize {
        self.marked.iter().filter(|&m| m).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Digraph {
        // 0 -> 1 -> 2 -> 3, 4 -> 2
        Digraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (4, 2)]).unwrap()
    }

    #[test]
    fn test_single_source() {
        let bfs = BreadthFirstPaths::new(&chain(), 0);
        assert_eq!(bfs.dist_to(0), Some(0));
        assert_eq!(bfs.dist_to(3), Some(3));
        assert_eq!(bfs.dist_to(4), None);
        assert!(!bfs.has_path_to(4));
        assert_eq!(bfs.reached(), 4);
    }

    #[test]
    fn test_multi_source_takes_nearest() {
        let bfs = BreadthFirstPaths::from_sources(&chain(), &[0, 4]);
        assert_eq!(bfs.dist_to(2), Some(1));
        assert_eq!(bfs.dist_to(3), Some(2));
        assert_eq!(bfs.dist_to(1), Some(1));
    }

    #[test]
    fn test_duplicate_sources() {
        let bfs = BreadthFirstPaths::from_sources(&chain(), &[2, 2]);
        assert_eq!(bfs.dist_to(2), Some(0));
        assert_eq!(bfs.reached(), 2);
    }

    #[test]
    fn test_out_of_range_query_is_unreachable() {
        let bfs = BreadthFirstPaths::new(&chain(), 0);
        assert!(!bfs.has_path_to(99));
    }
}
