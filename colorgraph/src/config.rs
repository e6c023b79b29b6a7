use serde::{Deserialize, Serialize};

use crate::algorithms::backtrack::SearchLimits;
use crate::algorithms::picking::PickMode;
use crate::error::ConfigError;
use crate::limits;
use crate::session::Algorithm;

/// Tunables for one interactive session. Every field has a default, so a
/// partial JSON object such as `{"max_colors": 3}` is a complete config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Max pick-to-vertex distance that counts as clicking a vertex.
    pub hit_radius: f32,
    pub pick_mode: PickMode,
    /// Colorer used by `Recompute` until toggled.
    pub algorithm: Algorithm,
    /// Palette bound for the backtracking colorer.
    pub max_colors: u32,
    /// Step budget for the backtracking colorer; `None` is unbounded.
    pub max_search_steps: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            hit_radius: limits::DEFAULT_HIT_RADIUS,
            pick_mode: PickMode::Nearest,
            algorithm: Algorithm::Greedy,
            max_colors: limits::DEFAULT_MAX_COLORS,
            max_search_steps: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: SessionConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !limits::in_radius_bounds(self.hit_radius) {
            return Err(ConfigError::OutOfRange {
                param: "hit_radius",
                min: 0.0,
                max: limits::HIT_RADIUS_MAX as f64,
                got: self.hit_radius as f64,
            });
        }
        if self.max_colors == 0 || self.max_colors > limits::MAX_COLORS_CAP {
            return Err(ConfigError::OutOfRange {
                param: "max_colors",
                min: 1.0,
                max: limits::MAX_COLORS_CAP as f64,
                got: self.max_colors as f64,
            });
        }
        Ok(())
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_steps: self.max_search_steps,
        }
    }
}
