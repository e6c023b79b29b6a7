use serde::{Deserialize, Serialize};

use crate::{Graph, Pick};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickMode {
    /// Closest vertex within the radius; ties go to the lower id.
    #[default]
    Nearest,
    /// Lowest-id vertex within the radius, regardless of distance.
    FirstInCreationOrder,
}

pub fn pick_impl(g: &Graph, x: f32, y: f32, radius: f32, mode: PickMode) -> Option<Pick> {
    if !x.is_finite() || !y.is_finite() || !(radius >= 0.0) {
        return None;
    }
    let r2 = radius * radius;
    let mut best: Option<(u32, f32)> = None;
    for (i, v) in g.vertices.iter().enumerate() {
        let d2 = v.dist_sq(x, y);
        if d2 > r2 {
            continue;
        }
        match mode {
            PickMode::FirstInCreationOrder => {
                best = Some((i as u32, d2));
                break;
            }
            PickMode::Nearest => {
                if best.map_or(true, |(_, bd)| d2 < bd) {
                    best = Some((i as u32, d2));
                }
            }
        }
    }
    best.map(|(id, d2)| Pick { id, dist: d2.sqrt() })
}
