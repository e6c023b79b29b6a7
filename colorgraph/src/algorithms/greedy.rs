use crate::algorithms::adjacency::AdjacencyList;
use crate::coloring::Coloring;

/// First-fit sequential coloring in ascending vertex-id order.
///
/// Each vertex takes the smallest color not held by an already colored
/// neighbor. Always produces a valid coloring with at most `max_degree + 1`
/// colors; vertex `v` never receives a color above `degree(v)`.
pub fn color_greedy(adj: &AdjacencyList) -> Coloring {
    let n = adj.len();
    let mut colors: Vec<Option<u32>> = vec![None; n];
    // taken[c] == v + 1 marks color c as forbidden while processing v
    let mut taken: Vec<usize> = Vec::new();
    for v in 0..n {
        let deg = adj.degree(v as u32);
        if taken.len() < deg + 1 {
            taken.resize(deg + 1, 0);
        }
        for w in adj.neighbors(v as u32) {
            if let Some(c) = colors[w as usize] {
                if (c as usize) <= deg {
                    taken[c as usize] = v + 1;
                }
            }
        }
        let c = (0..=deg).find(|&c| taken[c] != v + 1).unwrap_or(deg);
        colors[v] = Some(c as u32);
    }
    Coloring::new(colors.into_iter().map(|c| c.unwrap_or(0)).collect())
}
