//! Crossword state module.
//!
//! - `document` - Read-only puzzle input (boards, cells, clues, clue lists)
//! - `cell` - Cells derived from board 0 with row/column positions
//! - `input` - Key events from the host UI
//! - `config` - Grid sizing
//! - `puzzle` - Selection and navigation state machine
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────┐   set_puzzle    ┌──────────────────────────────┐
//! │ PuzzleDocument        │────────────────▶│ PuzzleState                  │
//! │ (external loader)     │                 │                              │
//! └───────────────────────┘                 │  cells (regenerated)         │
//!                                           │  current_cell_id             │
//! ┌───────────────────────┐  handle_key     │  highlight_mode              │
//! │ Host UI key events    │────────────────▶│                              │
//! └───────────────────────┘                 │  selected_cell / _clue ──────┼──▶ renderer
//!                                           └──────────────────────────────┘
//! ```

pub mod cell;
pub mod config;
pub mod document;
pub mod input;
pub mod puzzle;

pub use cell::{Cell, PLAYABLE};
pub use config::{StateConfig, BLANK_GRID_SIZE, FALLBACK_DIMENSION};
pub use document::{
    Board, CellSpec, Clue, ClueList, Dimensions, Direction, DocumentError, PuzzleDocument,
};
pub use input::{KeyInput, Step};
pub use puzzle::{KeyOutcome, PuzzleState};
