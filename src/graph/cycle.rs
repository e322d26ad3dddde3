//! Directed cycle detection.
//!
//! Uses an explicit-stack depth-first search so that long hypernym chains
//! cannot exhaust the call stack.

use bit_vec::BitVec;

use crate::graph::digraph::Digraph;

/// Finds a directed cycle in a graph, if one exists.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Run the search over every vertex of `graph`.
    pub fn new(graph: &Digraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut marked = BitVec::from_elem(vertex_count, false);
        let mut on_stack = BitVec::from_elem(vertex_count, false);
        let mut edge_to = vec![usize::MAX; vertex_count];

        for start in 0..vertex_count {
            if marked[start] {
                continue;
            }

            // (vertex, index of the next out-neighbour to visit)
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            marked.set(start, true);
            on_stack.set(start, true);

            while let Some(frame) = stack.last_mut() {
                let (v, next) = *frame;
                let Some(&w) = graph.adj(v).get(next) else {
                    on_stack.set(v, false);
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                if !marked[w] {
                    edge_to[w] = v;
                    marked.set(w, true);
                    on_stack.set(w, true);
                    stack.push((w, 0));
                } else if on_stack[w] {
                    return DirectedCycle {
                        cycle: Some(trace_cycle(&edge_to, v, w)),
                    };
                }
            }
        }

        DirectedCycle { cycle: None }
    }

    /// Whether the graph has a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The cycle found, as a closed walk `[w, .., v, w]`.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Walk `edge_to` back from `v` to `w`, where `v -> w` closes the cycle.
fn trace_cycle(edge_to: &[usize], v: usize, w: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut x = v;
    while x != w {
        path.push(x);
        x = edge_to[x];
    }
    path.push(w);
    path.reverse();
    path.push(w);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(vertex_count: usize, edges: &[(usize, usize)]) -> DirectedCycle {
        let graph = Digraph::from_edges(vertex_count, edges.iter().copied()).unwrap();
        DirectedCycle::new(&graph)
    }

    #[test]
    fn test_cycle_detection_logic() {
        let cases: Vec<(usize, Vec<(usize, usize)>, bool, &str)> = vec![
            (3, vec![(0, 1), (1, 2)], false, "Chain"),
            (2, vec![(0, 1), (1, 0)], true, "Simple cycle"),
            (4, vec![(0, 1), (0, 2), (1, 3), (2, 3)], false, "Diamond DAG"),
            (1, vec![(0, 0)], true, "Self loop"),
            (3, vec![(0, 1), (1, 2), (2, 0)], true, "Three node cycle"),
            (0, vec![], false, "Empty graph"),
            (5, vec![(0, 1), (2, 3), (3, 4), (4, 2)], true, "Cycle in second component"),
        ];

        for (vertex_count, edges, expected, desc) in cases {
            let finder = detect(vertex_count, &edges);
            assert_eq!(finder.has_cycle(), expected, "Failed: {desc}");
        }
    }

    #[test]
    fn test_cycle_content() {
        let finder = detect(4, &[(0, 1), (1, 2), (2, 3), (3, 1)]);
        let cycle = finder.cycle().unwrap();

        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(cycle.len(), 4);
        for pair in cycle.windows(2) {
            assert!(
                [(1, 2), (2, 3), (3, 1)].contains(&(pair[0], pair[1])),
                "{pair:?} is not an edge of the cycle"
            );
        }
    }

    #[test]
    fn test_self_loop_content() {
        let finder = detect(2, &[(0, 1), (1, 1)]);
        assert_eq!(finder.cycle(), Some(&[1, 1][..]));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
        assert!(!detect(n, &edges).has_cycle());
    }
}
