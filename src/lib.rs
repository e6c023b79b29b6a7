use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{init_logging, palette_rgba, set_panic_hook};

#[wasm_bindgen]
pub struct Session { pub(crate) inner: colorgraph::Session }

impl Session {
    pub fn rs_new() -> Session { Session { inner: colorgraph::Session::default() } }
    pub fn rs_graph_version(&self) -> u64 { self.inner.graph().version() }
}
