//! Top-level interactive controller.
//!
//! A `Session` owns the graph, the selection state machine, the press latch
//! and the last computed coloring. Hosts feed it pointer input and
//! [`Command`]s, then read the graph and coloring back for drawing. All
//! mutation happens inside these calls, so a host that renders after each
//! call never sees a half-applied edit.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::algorithms::backtrack::{color_bounded, SearchOutcome};
use crate::algorithms::greedy::color_greedy;
use crate::coloring::Coloring;
use crate::config::SessionConfig;
use crate::error::{ConfigError, GraphError};
use crate::model::{Color, VertexId};
use crate::palette;
use crate::selection::{PickOutcome, PressLatch, SelectionController, SelectionState};
use crate::Graph;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Greedy,
    Backtracking,
}

impl Algorithm {
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Greedy => Algorithm::Backtracking,
            Algorithm::Backtracking => Algorithm::Greedy,
        }
    }
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Backtracking => "backtracking",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "algorithm", rename_all = "snake_case")]
pub enum Command {
    ClearAll,
    UndoLastVertex,
    Recompute,
    ToggleAlgorithm(Algorithm),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutcome {
    Cleared,
    /// `id` is `None` when the graph was already empty.
    VertexRemoved { id: Option<VertexId> },
    Colored { algorithm: Algorithm, distinct: usize },
    /// Exhaustive search proved `max_colors` insufficient.
    NoColoring { max_colors: u32 },
    /// Search budget ran out before an answer.
    SearchAborted { max_colors: u32, steps: u64 },
    AlgorithmSet { algorithm: Algorithm },
}

/// Drawn for vertices not covered by the current coloring.
pub const UNCOLORED: Color = Color::rgb(200, 200, 200);

#[derive(Clone, Debug)]
struct ComputedColoring {
    coloring: Coloring,
    graph_version: u64,
}

pub struct Session {
    graph: Graph,
    selection: SelectionController,
    latch: PressLatch,
    config: SessionConfig,
    algorithm: Algorithm,
    coloring: Option<ComputedColoring>,
    last_recompute: Option<CommandOutcome>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            graph: Graph::new(),
            selection: SelectionController::new(config.hit_radius, config.pick_mode),
            latch: PressLatch::default(),
            algorithm: config.algorithm,
            config,
            coloring: None,
            last_recompute: None,
        }
    }

    /// Replaces the config. The graph and any coloring are kept; the active
    /// algorithm is reset to the config's.
    pub fn set_config(&mut self, config: SessionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.selection.set_hit_radius(config.hit_radius);
        self.selection.set_pick_mode(config.pick_mode);
        self.algorithm = config.algorithm;
        self.config = config;
        debug!("session config updated: {:?}", self.config);
        Ok(())
    }
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // Input

    pub fn pick(&mut self, x: f32, y: f32) -> Result<PickOutcome, GraphError> {
        self.selection.on_pick(&mut self.graph, x, y)
    }

    /// Polled pointer input. Issues a pick only on the poll where the button
    /// goes down; holding it across polls does nothing further.
    pub fn pointer(&mut self, x: f32, y: f32, down: bool) -> Option<Result<PickOutcome, GraphError>> {
        if self.latch.update(down) {
            Some(self.pick(x, y))
        } else {
            None
        }
    }

    pub fn handle(&mut self, cmd: Command) -> CommandOutcome {
        match cmd {
            Command::ClearAll => {
                self.graph.clear();
                self.selection.reset();
                self.coloring = None;
                self.last_recompute = None;
                info!("session cleared");
                CommandOutcome::Cleared
            }
            Command::UndoLastVertex => {
                let id = self.graph.remove_last_vertex();
                if let Some(id) = id {
                    self.selection.forget_vertex(id);
                    self.coloring = None;
                    self.last_recompute = None;
                }
                CommandOutcome::VertexRemoved { id }
            }
            Command::Recompute => self.recompute(),
            Command::ToggleAlgorithm(algorithm) => {
                self.algorithm = algorithm;
                debug!("active algorithm: {}", algorithm.label());
                CommandOutcome::AlgorithmSet { algorithm }
            }
        }
    }

    fn recompute(&mut self) -> CommandOutcome {
        let adj = self.graph.adjacency();
        let outcome = match self.algorithm {
            Algorithm::Greedy => self.store(color_greedy(&adj)),
            Algorithm::Backtracking => {
                match color_bounded(&adj, self.config.max_colors, self.config.search_limits()) {
                    SearchOutcome::Colored(c) => self.store(c),
                    SearchOutcome::Exhausted { max_colors } => {
                        warn!("no coloring found with {} colors", max_colors);
                        CommandOutcome::NoColoring { max_colors }
                    }
                    SearchOutcome::BudgetExceeded { max_colors, steps } => {
                        warn!("search with {} colors stopped after {} steps", max_colors, steps);
                        CommandOutcome::SearchAborted { max_colors, steps }
                    }
                }
            }
        };
        self.last_recompute = Some(outcome);
        outcome
    }

    fn store(&mut self, coloring: Coloring) -> CommandOutcome {
        let distinct = coloring.distinct_count();
        info!(
            "{} coloring of {} vertices uses {} colors",
            self.algorithm.label(),
            coloring.len(),
            distinct
        );
        self.coloring = Some(ComputedColoring {
            coloring,
            graph_version: self.graph.version(),
        });
        CommandOutcome::Colored {
            algorithm: self.algorithm,
            distinct,
        }
    }

    // Output

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    /// The coloring of the graph as it is now. `None` until a recompute
    /// succeeds, and again once any edit makes the result out of date.
    pub fn coloring(&self) -> Option<&Coloring> {
        self.last_coloring().filter(|_| self.is_coloring_current())
    }
    /// The most recent successful coloring, even if the graph has grown since.
    /// It may be shorter than the vertex count; index it with [`Coloring::get`].
    pub fn last_coloring(&self) -> Option<&Coloring> {
        self.coloring.as_ref().map(|c| &c.coloring)
    }
    /// False when the graph changed since the coloring was computed.
    pub fn is_coloring_current(&self) -> bool {
        self.coloring
            .as_ref()
            .map_or(false, |c| c.graph_version == self.graph.version())
    }
    /// Color of a live vertex, if the last coloring covers it. Vertices added
    /// after that coloring was computed get `None`.
    pub fn vertex_color(&self, id: VertexId) -> Option<u32> {
        if !self.graph.contains(id) {
            return None;
        }
        self.last_coloring()?.get(id)
    }
    /// Distinct colors in the current coloring; 0 when there is none.
    pub fn distinct_colors(&self) -> usize {
        self.coloring().map_or(0, |c| c.distinct_count())
    }

    /// RGBA bytes per live vertex; uncovered vertices get [`UNCOLORED`].
    pub fn vertex_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.graph.vertices().len() * 4);
        for id in 0..self.graph.vertex_count() {
            let c = self.vertex_color(id).map_or(UNCOLORED, palette::palette_color);
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }

    pub fn status_text(&self) -> String {
        match self.last_recompute {
            Some(CommandOutcome::NoColoring { max_colors }) => {
                format!("no coloring found with {} colors", max_colors)
            }
            Some(CommandOutcome::SearchAborted { max_colors, steps }) => {
                format!("search with {} colors gave up after {} steps", max_colors, steps)
            }
            _ => format!(
                "{}: {} colors used",
                self.algorithm.label(),
                self.distinct_colors()
            ),
        }
    }
}
