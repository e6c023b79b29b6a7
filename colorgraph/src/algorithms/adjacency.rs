use std::collections::BTreeSet;

use crate::model::{Edge, VertexId};

/// Neighbor sets indexed by vertex id.
///
/// Every id in `0..len()` has an entry, isolated vertices included. Entries are
/// symmetric and parallel edges collapse into one neighbor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    sets: Vec<BTreeSet<VertexId>>,
}

impl AdjacencyList {
    pub fn build(vertex_count: usize, edges: &[Edge]) -> Self {
        let mut sets = vec![BTreeSet::new(); vertex_count];
        for e in edges {
            let (a, b) = (e.a as usize, e.b as usize);
            if a == b || a >= vertex_count || b >= vertex_count {
                continue;
            }
            sets[a].insert(e.b);
            sets[b].insert(e.a);
        }
        AdjacencyList { sets }
    }

    /// Convenience for callers holding bare `(u, v)` pairs.
    pub fn from_pairs(vertex_count: usize, pairs: &[(VertexId, VertexId)]) -> Self {
        let edges: Vec<Edge> = pairs.iter().map(|&(a, b)| Edge { a, b }).collect();
        Self::build(vertex_count, &edges)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Ascending neighbor ids; empty for out-of-range `v`.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.sets.get(v as usize).into_iter().flat_map(|s| s.iter().copied())
    }
    pub fn degree(&self, v: VertexId) -> usize {
        self.sets.get(v as usize).map_or(0, |s| s.len())
    }
    pub fn max_degree(&self) -> usize {
        self.sets.iter().map(|s| s.len()).max().unwrap_or(0)
    }
    pub fn are_adjacent(&self, v: VertexId, w: VertexId) -> bool {
        self.sets.get(v as usize).map_or(false, |s| s.contains(&w))
    }

    /// Unique undirected pairs `(lo, hi)` in ascending order.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.sets.iter().enumerate().flat_map(|(v, s)| {
            let v = v as VertexId;
            s.iter().copied().filter(move |&w| w > v).map(move |w| (v, w))
        })
    }

    pub fn is_symmetric(&self) -> bool {
        self.sets.iter().enumerate().all(|(v, s)| {
            s.iter().all(|&w| self.are_adjacent(w, v as VertexId))
        })
    }
}
