//! Result of a shortest ancestral path query.

use serde::{Deserialize, Serialize};

use crate::graph::bfs::BreadthFirstPaths;

/// Length and common ancestor of a shortest ancestral path.
///
/// Both fields are `-1` when no vertex is reachable from both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ancestry {
    pub length: i64,
    pub ancestor: i64,
}

impl Ancestry {
    /// No common ancestor.
    pub const NONE: Ancestry = Ancestry {
        length: -1,
        ancestor: -1,
    };

    /// A vertex is its own ancestor at distance zero.
    pub fn identity(v: usize) -> Self {
        Ancestry {
            length: 0,
            ancestor: v as i64,
        }
    }

    /// Whether a common ancestor was found.
    pub fn is_found(&self) -> bool {
        self.ancestor >= 0
    }

    /// The ancestor as a vertex id, if found.
    pub fn ancestor_id(&self) -> Option<usize> {
        usize::try_from(self.ancestor).ok()
    }

    /// Scan vertices in ascending id order and keep the first one that
    /// minimizes the summed distance from both searches.
    pub(crate) fn scan(
        vertex_count: usize,
        from_v: &BreadthFirstPaths,
        from_w: &BreadthFirstPaths,
    ) -> Self {
        let mut best = Ancestry::NONE;
        for i in 0..vertex_count {
            let (Some(dv), Some(dw)) = (from_v.dist_to(i), from_w.dist_to(i)) else {
                continue;
            };
            let length = (dv + dw) as i64;
            if best.length < 0 || length < best.length {
                best = Ancestry {
                    length,
                    ancestor: i as i64,
                };
            }
        }
        best
    }
}

impl Default for Ancestry {
    fn default() -> Self {
        Ancestry::NONE
    }
}
