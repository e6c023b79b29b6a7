use crate::Session;
use crate::error;
use crate::interop::{js_obj, to_js};
use colorgraph::error::GraphError;
use colorgraph::session::{Algorithm, Command, CommandOutcome};
use colorgraph::SessionConfig;
use js_sys::{Float32Array, Uint32Array, Uint8Array};
use log::{info, warn, Level};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen]
pub fn init_logging() {
    let _ = console_log::init_with_level(Level::Debug);
    set_panic_hook();
    info!("colorgraph: logging initialized");
}

/// RGBA bytes of the display color for a color index (wraps every 6).
#[wasm_bindgen]
pub fn palette_rgba(index: u32) -> Uint8Array {
    let c = colorgraph::palette::palette_color(index);
    Uint8Array::from(&[c.r, c.g, c.b, c.a][..])
}

fn parse_algorithm(name: &str) -> Option<Algorithm> {
    match name {
        "greedy" => Some(Algorithm::Greedy),
        "backtracking" => Some(Algorithm::Backtracking),
        _ => None,
    }
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        crate::Session::rs_new()
    }
    pub fn graph_version(&self) -> u64 {
        self.rs_graph_version()
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.graph().vertex_count()
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.graph().edge_count()
    }

    // Input
    pub fn pick(&mut self, x: f32, y: f32) -> JsValue {
        match self.inner.pick(x, y) {
            Ok(outcome) => to_js(&outcome),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn pick_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::from_graph_error(&GraphError::NonFinite { param: "x" });
        }
        if !y.is_finite() {
            return error::from_graph_error(&GraphError::NonFinite { param: "y" });
        }
        match self.inner.pick(x, y) {
            Ok(outcome) => error::ok(to_js(&outcome)),
            Err(e) => error::from_graph_error(&e),
        }
    }
    /// Polled button state; returns the pick outcome only on press-down.
    /// `null` while held, while released, or when the pick fails.
    pub fn pointer(&mut self, x: f32, y: f32, down: bool) -> JsValue {
        match self.inner.pointer(x, y, down) {
            Some(Ok(outcome)) => to_js(&outcome),
            Some(Err(_)) | None => JsValue::NULL,
        }
    }
    /// Like `pointer`, but every poll gets an envelope; `data` is `null` when
    /// the poll did not fire a pick.
    pub fn pointer_res(&mut self, x: f32, y: f32, down: bool) -> JsValue {
        match self.inner.pointer(x, y, down) {
            Some(Ok(outcome)) => error::ok(to_js(&outcome)),
            Some(Err(e)) => error::from_graph_error(&e),
            None => error::ok(JsValue::NULL),
        }
    }
    pub fn clear_all(&mut self) {
        self.inner.handle(Command::ClearAll);
    }
    pub fn undo_last_vertex(&mut self) -> Option<u32> {
        match self.inner.handle(Command::UndoLastVertex) {
            CommandOutcome::VertexRemoved { id } => id,
            _ => None,
        }
    }
    pub fn recompute(&mut self) -> JsValue {
        to_js(&self.inner.handle(Command::Recompute))
    }
    pub fn recompute_res(&mut self) -> JsValue {
        match self.inner.handle(Command::Recompute) {
            CommandOutcome::NoColoring { max_colors } => {
                error::err(
                    "no_coloring",
                    format!("no coloring found with {} colors", max_colors),
                    js_obj(&[("max_colors", JsValue::from(max_colors))]),
                )
            }
            CommandOutcome::SearchAborted { max_colors, steps } => {
                let data = js_obj(&[
                    ("max_colors", JsValue::from(max_colors)),
                    ("steps", JsValue::from_f64(steps as f64)),
                ]);
                error::err("search_aborted", "search step budget exhausted", data)
            }
            outcome => error::ok(to_js(&outcome)),
        }
    }
    /// Accepts any serialized `Command`, e.g. `{kind: "toggle_algorithm", algorithm: "greedy"}`.
    pub fn handle_command_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<Command>(v) {
            Ok(cmd) => error::ok(to_js(&self.inner.handle(cmd))),
            Err(e) => error::err("invalid_command", e.to_string(), JsValue::NULL),
        }
    }
    pub fn set_algorithm(&mut self, name: &str) -> bool {
        match parse_algorithm(name) {
            Some(a) => {
                self.inner.handle(Command::ToggleAlgorithm(a));
                true
            }
            None => false,
        }
    }
    pub fn set_algorithm_res(&mut self, name: &str) -> JsValue {
        match parse_algorithm(name) {
            Some(a) => error::ok(to_js(&self.inner.handle(Command::ToggleAlgorithm(a)))),
            None => error::err(
                "invalid_mode",
                "algorithm must be 'greedy' or 'backtracking'",
                JsValue::NULL,
            ),
        }
    }
    /// Flips between greedy and backtracking; returns the new algorithm name.
    pub fn toggle_algorithm(&mut self) -> String {
        let next = self.inner.algorithm().toggled();
        self.inner.handle(Command::ToggleAlgorithm(next));
        next.label().to_string()
    }
    pub fn algorithm(&self) -> String {
        self.inner.algorithm().label().to_string()
    }

    // Config
    pub fn set_config_res(&mut self, v: JsValue) -> JsValue {
        let cfg = match serde_wasm_bindgen::from_value::<serde_json::Value>(v)
            .map_err(|e| e.to_string())
            .and_then(|val| serde_json::from_value::<SessionConfig>(val).map_err(|e| e.to_string()))
        {
            Ok(cfg) => cfg,
            Err(msg) => {
                warn!("rejected session config: {}", msg);
                return error::err("config_parse", msg, JsValue::NULL);
            }
        };
        match self.inner.set_config(cfg) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_config_error(&e),
        }
    }
    pub fn get_config(&self) -> JsValue {
        to_js(self.inner.config())
    }

    // Output for drawing
    pub fn get_vertex_data(&self) -> JsValue {
        let (ids, pos) = self.inner.graph().get_vertex_arrays();
        js_obj(&[
            ("ids", Uint32Array::from(&ids[..]).into()),
            ("positions", Float32Array::from(&pos[..]).into()),
        ])
    }
    pub fn get_edge_data(&self) -> JsValue {
        let ea = self.inner.graph().get_edge_arrays();
        js_obj(&[
            ("ids", Uint32Array::from(&ea.ids[..]).into()),
            ("endpoints", Uint32Array::from(&ea.endpoints[..]).into()),
        ])
    }
    /// `Uint32Array` with one color index per vertex, or `null` when nothing
    /// was computed or the graph changed since.
    pub fn get_coloring(&self) -> JsValue {
        match self.inner.coloring() {
            Some(c) => Uint32Array::from(c.as_slice()).into(),
            None => JsValue::NULL,
        }
    }
    pub fn coloring_is_current(&self) -> bool {
        self.inner.is_coloring_current()
    }
    pub fn get_vertex_colors(&self) -> Uint8Array {
        Uint8Array::from(&self.inner.vertex_rgba()[..])
    }
    pub fn vertex_color(&self, id: u32) -> Option<u32> {
        self.inner.vertex_color(id)
    }
    pub fn distinct_colors(&self) -> u32 {
        self.inner.distinct_colors() as u32
    }
    pub fn status_text(&self) -> String {
        self.inner.status_text()
    }
    pub fn selection_anchor(&self) -> Option<u32> {
        match self.inner.selection() {
            colorgraph::selection::SelectionState::PendingEdge { anchor } => Some(anchor),
            colorgraph::selection::SelectionState::Idle => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
