use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::algorithms::adjacency::AdjacencyList;
use crate::model::{Color, VertexId};
use crate::palette::palette_color;

/// One color index per vertex, indexed by vertex id.
///
/// A `Coloring` always describes a finished assignment. "Not computed yet" is
/// `None` at the session level, and a failed search is a separate outcome;
/// neither is represented by an empty `Coloring`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    colors: Vec<u32>,
}

impl Coloring {
    pub fn new(colors: Vec<u32>) -> Self {
        Coloring { colors }
    }
    pub fn len(&self) -> usize {
        self.colors.len()
    }
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
    pub fn get(&self, v: VertexId) -> Option<u32> {
        self.colors.get(v as usize).copied()
    }
    pub fn as_slice(&self) -> &[u32] {
        &self.colors
    }
    pub fn into_vec(self) -> Vec<u32> {
        self.colors
    }

    pub fn distinct_count(&self) -> usize {
        self.colors.iter().collect::<BTreeSet<_>>().len()
    }

    /// Edges whose endpoints share a color, or that reach past the coloring.
    pub fn conflicts(&self, adj: &AdjacencyList) -> usize {
        adj.edge_pairs()
            .filter(|&(u, v)| match (self.get(u), self.get(v)) {
                (Some(cu), Some(cv)) => cu == cv,
                _ => true,
            })
            .count()
    }

    /// Covers every vertex and no edge joins two equal colors.
    ///
    /// Says nothing about whether the colors are visually distinct: see
    /// [`crate::palette`].
    pub fn is_valid_for(&self, adj: &AdjacencyList) -> bool {
        self.len() == adj.len() && self.conflicts(adj) == 0
    }

    pub fn display_colors(&self) -> Vec<Color> {
        self.colors.iter().map(|&c| palette_color(c)).collect()
    }

    /// Flat RGBA bytes, four per vertex.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.colors.len() * 4);
        for c in self.display_colors() {
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }
}

impl From<Vec<u32>> for Coloring {
    fn from(colors: Vec<u32>) -> Self {
        Coloring::new(colors)
    }
}
