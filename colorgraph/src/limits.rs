// Centralized caps and defaults for interactive sessions

// Graph size caps
pub const MAX_VERTICES: usize = 10_000;
pub const MAX_EDGES: usize = 200_000;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 = 10_000_000.0;

// Picking
pub const DEFAULT_HIT_RADIUS: f32 = 10.0;
pub const HIT_RADIUS_MAX: f32 = 1_000.0;

// Bounded search
pub const DEFAULT_MAX_COLORS: u32 = 4;
pub const MAX_COLORS_CAP: u32 = 64;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool {
    x.is_finite() && x >= COORD_MIN && x <= COORD_MAX
}

#[inline]
pub fn in_radius_bounds(r: f32) -> bool {
    r.is_finite() && r > 0.0 && r <= HIT_RADIUS_MAX
}
