//! Fixed display palette for color classes.
//!
//! Color index `i` maps to `PALETTE[i % PALETTE_LEN]`. Beyond six classes,
//! distinct logical colors alias to the same display color. A coloring can be
//! valid (no adjacent vertices share an index) and still show two neighbors
//! in the same on-screen color.

use crate::model::Color;

pub const PALETTE_LEN: usize = 6;

pub const PALETTE: [Color; PALETTE_LEN] = [
    Color::rgb(230, 57, 70),   // red
    Color::rgb(69, 123, 157),  // blue
    Color::rgb(42, 157, 143),  // green
    Color::rgb(233, 196, 106), // yellow
    Color::rgb(155, 93, 229),  // purple
    Color::rgb(244, 162, 97),  // orange
];

#[inline]
pub fn palette_color(index: u32) -> Color {
    PALETTE[index as usize % PALETTE_LEN]
}

/// Whether two color indices render identically.
#[inline]
pub fn aliases(a: u32, b: u32) -> bool {
    a as usize % PALETTE_LEN == b as usize % PALETTE_LEN
}
