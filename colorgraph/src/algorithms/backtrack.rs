use serde::{Deserialize, Serialize};

use crate::algorithms::adjacency::AdjacencyList;
use crate::coloring::Coloring;

/// Optional bound on the amount of work one search may do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of tentative color assignments; `None` searches exhaustively.
    pub max_steps: Option<u64>,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits { max_steps: None };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every vertex colored with an index below `max_colors`.
    Colored(Coloring),
    /// No assignment with `max_colors` colors exists.
    Exhausted { max_colors: u32 },
    /// Gave up after `steps` tentative assignments without an answer.
    BudgetExceeded { max_colors: u32, steps: u64 },
}

impl SearchOutcome {
    pub fn coloring(&self) -> Option<&Coloring> {
        match self {
            SearchOutcome::Colored(c) => Some(c),
            _ => None,
        }
    }
    pub fn into_coloring(self) -> Option<Coloring> {
        match self {
            SearchOutcome::Colored(c) => Some(c),
            _ => None,
        }
    }
    pub fn is_colored(&self) -> bool {
        matches!(self, SearchOutcome::Colored(_))
    }
}

enum Step {
    Found,
    Failed,
    OutOfBudget,
}

struct Search<'a> {
    adj: &'a AdjacencyList,
    max_colors: u32,
    assigned: Vec<Option<u32>>,
    /// Next candidate color per vertex; reset to 0 when the search backs out.
    next: Vec<u32>,
    steps: u64,
    max_steps: Option<u64>,
}

impl<'a> Search<'a> {
    fn is_free(&self, v: usize, c: u32) -> bool {
        self.adj
            .neighbors(v as u32)
            .all(|w| self.assigned[w as usize] != Some(c))
    }

    /// Gives `v` its next free candidate color. `Ok(false)` once candidates
    /// run out.
    fn advance(&mut self, v: usize) -> Result<bool, Step> {
        while self.next[v] < self.max_colors {
            let c = self.next[v];
            self.next[v] += 1;
            if !self.is_free(v, c) {
                continue;
            }
            if self.max_steps.map_or(false, |max| self.steps >= max) {
                return Err(Step::OutOfBudget);
            }
            self.steps += 1;
            self.assigned[v] = Some(c);
            return Ok(true);
        }
        Ok(false)
    }

    /// Depth-first over vertex ids. The per-vertex cursor in `next` stands in
    /// for a call stack, so graphs up to `MAX_VERTICES` need no stack depth.
    fn run(&mut self) -> Step {
        let n = self.assigned.len();
        let mut v = 0;
        loop {
            if v == n {
                return Step::Found;
            }
            match self.advance(v) {
                Err(step) => return step,
                Ok(true) => v += 1,
                Ok(false) => {
                    self.next[v] = 0;
                    if v == 0 {
                        return Step::Failed;
                    }
                    v -= 1;
                    self.assigned[v] = None;
                }
            }
        }
    }
}

/// Exact coloring with at most `max_colors` colors by depth-first search.
///
/// Vertices are decided in ascending id order and candidate colors are tried in
/// ascending order, so the first solution found is the lexicographically
/// smallest one. Worst case is `max_colors ^ n` assignments.
pub fn color_bounded(adj: &AdjacencyList, max_colors: u32, limits: SearchLimits) -> SearchOutcome {
    let mut search = Search {
        adj,
        max_colors,
        assigned: vec![None; adj.len()],
        next: vec![0; adj.len()],
        steps: 0,
        max_steps: limits.max_steps,
    };
    match search.run() {
        Step::Found => {
            let colors = search.assigned.into_iter().flatten().collect::<Vec<_>>();
            debug_assert_eq!(colors.len(), adj.len());
            SearchOutcome::Colored(Coloring::new(colors))
        }
        Step::Failed => SearchOutcome::Exhausted { max_colors },
        Step::OutOfBudget => SearchOutcome::BudgetExceeded {
            max_colors,
            steps: search.steps,
        },
    }
}
