pub mod model;
pub mod error;
pub mod limits;
pub mod config;
pub mod coloring;
pub mod palette;
pub mod selection;
pub mod session;
pub mod algorithms {
    pub mod adjacency;
    pub mod backtrack;
    pub mod greedy;
    pub mod picking;
}

use algorithms::adjacency::AdjacencyList;
use algorithms::picking::PickMode;
use error::GraphError;
use log::debug;
use model::{Edge, Vertex, VertexId};
use serde::{Deserialize, Serialize};

pub use coloring::Coloring;
pub use config::SessionConfig;
pub use session::{Command, Session};

/// Dense vertex arena; a vertex id is its index.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) version: u64,
}

pub struct EdgeArrays {
    pub ids: Vec<u32>,
    pub endpoints: Vec<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub id: VertexId,
    pub dist: f32,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            version: 1,
        }
    }
    /// Monotonic edit counter; bumps on every successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }
    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    // Vertices
    pub fn add_vertex(&mut self, x: f32, y: f32) -> Result<VertexId, GraphError> {
        check_coord("x", x)?;
        check_coord("y", y)?;
        if self.vertices.len() >= limits::MAX_VERTICES {
            return Err(GraphError::LimitExceeded {
                kind: "vertex",
                limit: limits::MAX_VERTICES,
            });
        }
        let id = self.vertices.len() as VertexId;
        self.vertices.push(Vertex { x, y });
        self.bump();
        debug!("added vertex {} at ({}, {})", id, x, y);
        Ok(id)
    }
    pub fn vertex(&self, id: VertexId) -> Option<Vertex> {
        self.vertices.get(id as usize).copied()
    }
    pub fn contains(&self, id: VertexId) -> bool {
        (id as usize) < self.vertices.len()
    }
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
    /// Removes the highest-id vertex together with every edge touching it.
    pub fn remove_last_vertex(&mut self) -> Option<VertexId> {
        self.vertices.pop()?;
        let id = self.vertices.len() as VertexId;
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        self.bump();
        debug!(
            "removed vertex {} and {} incident edges",
            id,
            before - self.edges.len()
        );
        Some(id)
    }

    // Edges
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<u32, GraphError> {
        if !self.contains(a) {
            return Err(GraphError::UnknownVertex { id: a });
        }
        if !self.contains(b) {
            return Err(GraphError::UnknownVertex { id: b });
        }
        if a == b {
            return Err(GraphError::SelfLoop { id: a });
        }
        if self.edges.len() >= limits::MAX_EDGES {
            return Err(GraphError::LimitExceeded {
                kind: "edge",
                limit: limits::MAX_EDGES,
            });
        }
        let id = self.edges.len() as u32;
        self.edges.push(Edge { a, b });
        self.bump();
        debug!("added edge {} ({} - {})", id, a, b);
        Ok(id)
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn edge_count(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn get_vertex_arrays(&self) -> (Vec<u32>, Vec<f32>) {
        let mut ids = Vec::with_capacity(self.vertices.len());
        let mut pos = Vec::with_capacity(self.vertices.len() * 2);
        for (i, v) in self.vertices.iter().enumerate() {
            ids.push(i as u32);
            pos.push(v.x);
            pos.push(v.y);
        }
        (ids, pos)
    }
    pub fn get_edge_arrays(&self) -> EdgeArrays {
        let mut ids = Vec::with_capacity(self.edges.len());
        let mut ep = Vec::with_capacity(self.edges.len() * 2);
        for (i, e) in self.edges.iter().enumerate() {
            ids.push(i as u32);
            ep.push(e.a);
            ep.push(e.b);
        }
        EdgeArrays { ids, endpoints: ep }
    }

    // Picking
    pub fn pick(&self, x: f32, y: f32, radius: f32, mode: PickMode) -> Option<Pick> {
        algorithms::picking::pick_impl(self, x, y, radius, mode)
    }

    /// Rebuilt from scratch on every call; never cached.
    pub fn adjacency(&self) -> AdjacencyList {
        AdjacencyList::build(self.vertices.len(), &self.edges)
    }

    // Clear
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.bump();
        debug!("graph cleared");
    }
}

fn check_coord(param: &'static str, v: f32) -> Result<(), GraphError> {
    if !v.is_finite() {
        return Err(GraphError::NonFinite { param });
    }
    if !limits::in_coord_bounds(v) {
        return Err(GraphError::OutOfRange {
            param,
            min: limits::COORD_MIN,
            max: limits::COORD_MAX,
            got: v,
        });
    }
    Ok(())
}
