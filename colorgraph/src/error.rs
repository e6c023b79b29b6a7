//! Error types for graph edits and session configuration.
//!
//! Every variant maps to a stable `code()` string so bindings can report
//! failures without matching on message text.

use thiserror::Error;

use crate::model::VertexId;

/// Rejected graph edit. The graph is left untouched whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge endpoint does not name a live vertex
    #[error("invalid vertex id {id}")]
    UnknownVertex { id: VertexId },

    /// Both endpoints name the same vertex
    #[error("edge endpoints cannot be the same vertex ({id})")]
    SelfLoop { id: VertexId },

    /// Coordinate is NaN or infinite
    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },

    /// Coordinate lies outside the accepted range
    #[error("parameter '{param}' out of range")]
    OutOfRange {
        param: &'static str,
        min: f32,
        max: f32,
        got: f32,
    },

    /// Session size cap reached
    #[error("{kind} limit of {limit} reached")]
    LimitExceeded { kind: &'static str, limit: usize },
}

impl GraphError {
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex { .. } => "invalid_id",
            GraphError::SelfLoop { .. } => "invalid_edge",
            GraphError::NonFinite { .. } => "non_finite",
            GraphError::OutOfRange { .. } => "out_of_range",
            GraphError::LimitExceeded { .. } => "limit_exceeded",
        }
    }
}

/// Invalid `SessionConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config field '{param}' out of range [{min}, {max}], got {got}")]
    OutOfRange {
        param: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Parse(_) => "config_parse",
            ConfigError::OutOfRange { .. } => "out_of_range",
        }
    }
}
