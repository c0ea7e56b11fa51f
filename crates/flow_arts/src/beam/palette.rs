//! Beam color palette

use crate::entities::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed pair of beam colors
///
/// One entry is drawn per emitter and used for both its start and finish
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette([Color; 2]);

impl ColorPalette {
    /// Green blade
    pub const GREEN: Color = Color::new(0, 200, 40);

    /// Red blade
    pub const RED: Color = Color::new(200, 10, 40);

    /// Create a palette from its entries
    pub const fn new(entries: [Color; 2]) -> Self {
        Self(entries)
    }

    /// Palette entries in order
    pub fn entries(&self) -> &[Color] {
        &self.0
    }

    /// Draw an index uniformly from `[0, len)`
    pub fn pick_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.0.len())
    }

    /// Draw an entry uniformly
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.0[self.pick_index(rng)]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new([Self::GREEN, Self::RED])
    }
}
