//! Click-driven graph construction.
//!
//! A pick on empty space adds a vertex. A pick on a vertex arms it as the
//! anchor of a new edge, and the next pick on another vertex closes the edge.
//! Any other second pick (empty space, or the anchor itself) just disarms.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::algorithms::picking::PickMode;
use crate::error::GraphError;
use crate::limits;
use crate::model::VertexId;
use crate::Graph;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Idle,
    PendingEdge { anchor: VertexId },
}

/// Side effect of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    AddVertex,
    Arm { anchor: VertexId },
    AddEdge { a: VertexId, b: VertexId },
    Disarm { anchor: VertexId },
}

/// What a pick did, for the host to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PickOutcome {
    VertexAdded { id: VertexId },
    AnchorSet { id: VertexId },
    EdgeAdded { edge: u32, a: VertexId, b: VertexId },
    Deselected { anchor: VertexId },
}

/// Next state and side effect for a pick that hit `hit` (or nothing).
pub fn transition(state: SelectionState, hit: Option<VertexId>) -> (SelectionState, Action) {
    match (state, hit) {
        (SelectionState::Idle, None) => (SelectionState::Idle, Action::AddVertex),
        (SelectionState::Idle, Some(v)) => (
            SelectionState::PendingEdge { anchor: v },
            Action::Arm { anchor: v },
        ),
        (SelectionState::PendingEdge { anchor }, Some(v)) if v != anchor => {
            (SelectionState::Idle, Action::AddEdge { a: anchor, b: v })
        }
        (SelectionState::PendingEdge { anchor }, _) => (SelectionState::Idle, Action::Disarm { anchor }),
    }
}

#[derive(Clone, Debug)]
pub struct SelectionController {
    state: SelectionState,
    hit_radius: f32,
    pick_mode: PickMode,
}

impl Default for SelectionController {
    fn default() -> Self {
        SelectionController::new(limits::DEFAULT_HIT_RADIUS, PickMode::default())
    }
}

impl SelectionController {
    pub fn new(hit_radius: f32, pick_mode: PickMode) -> Self {
        SelectionController {
            state: SelectionState::Idle,
            hit_radius,
            pick_mode,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }
    pub fn anchor(&self) -> Option<VertexId> {
        match self.state {
            SelectionState::PendingEdge { anchor } => Some(anchor),
            SelectionState::Idle => None,
        }
    }
    pub fn set_hit_radius(&mut self, r: f32) {
        self.hit_radius = r;
    }
    pub fn set_pick_mode(&mut self, mode: PickMode) {
        self.pick_mode = mode;
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Drops the anchor if it refers to `id`. Returns true when it did.
    pub fn forget_vertex(&mut self, id: VertexId) -> bool {
        if self.anchor() == Some(id) {
            self.reset();
            return true;
        }
        false
    }

    /// Applies one pick. On error the controller is back in `Idle` and the
    /// graph is unchanged.
    pub fn on_pick(&mut self, graph: &mut Graph, x: f32, y: f32) -> Result<PickOutcome, GraphError> {
        let hit = graph.pick(x, y, self.hit_radius, self.pick_mode).map(|p| p.id);
        let (next, action) = transition(self.state, hit);
        self.state = next;
        let outcome = match action {
            Action::AddVertex => graph
                .add_vertex(x, y)
                .map(|id| PickOutcome::VertexAdded { id }),
            Action::AddEdge { a, b } => graph
                .add_edge(a, b)
                .map(|edge| PickOutcome::EdgeAdded { edge, a, b }),
            Action::Arm { anchor } => Ok(PickOutcome::AnchorSet { id: anchor }),
            Action::Disarm { anchor } => Ok(PickOutcome::Deselected { anchor }),
        };
        match &outcome {
            Ok(o) => debug!("pick ({}, {}): {:?}", x, y, o),
            Err(e) => warn!("pick ({}, {}) rejected: {}", x, y, e),
        }
        outcome
    }
}

/// Turns a polled button level into one event per press.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressLatch {
    held: bool,
}

impl PressLatch {
    /// True only on the poll where the button goes from up to down.
    pub fn update(&mut self, down: bool) -> bool {
        let fired = down && !self.held;
        self.held = down;
        fired
    }
    pub fn is_held(&self) -> bool {
        self.held
    }
}
