//! Grid sizing configuration.

use serde::Deserialize;

/// Side length of the blank grid shown when no document is loaded.
pub const BLANK_GRID_SIZE: usize = 15;

/// Dimension used when a board reports a zero width or height.
pub const FALLBACK_DIMENSION: usize = 5;

/// Sizing knobs for [`PuzzleState`](super::PuzzleState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Width of the empty-board grid
    pub blank_width: usize,
    /// Height of the empty-board grid
    pub blank_height: usize,
    pub fallback_width: usize,
    pub fallback_height: usize,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            blank_width: BLANK_GRID_SIZE,
            blank_height: BLANK_GRID_SIZE,
            fallback_width: FALLBACK_DIMENSION,
            fallback_height: FALLBACK_DIMENSION,
        }
    }
}

impl StateConfig {
    /// Substitute fallbacks for zero dimensions. Never returns zero.
    pub fn resolve(&self, width: usize, height: usize) -> (usize, usize) {
        let width = if width == 0 { self.fallback_width } else { width };
        let height = if height == 0 { self.fallback_height } else { height };
        (width.max(1), height.max(1))
    }

    /// Size of the empty-board grid, at least 1x1.
    pub fn blank_dimensions(&self) -> (usize, usize) {
        (self.blank_width.max(1), self.blank_height.max(1))
    }
}
