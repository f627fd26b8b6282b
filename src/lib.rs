//! Crossword State Library
//!
//! Cursor and selection state for a crossword grid.
//!
//! # Overview
//!
//! Given a puzzle document (cells grouped into Across and Down clues), the
//! state tracks:
//!
//! - **Selection** - which cell is selected and which direction is active.
//!
//! - **Active clue** - the clue the selected cell belongs to in that direction.
//!
//! - **Navigation** - arrow keys toggle direction or step along clues,
//!   crossing clue boundaries and skipping blocked cells.
//!
//! - **Entry** - typed characters fill the selected cell and advance.
//!
//! # Design Principles
//!
//! 1. **No errors on boundaries** - running off the end of a line, or
//!    selecting a cell with no clue, leaves the selection unchanged.
//!
//! 2. **Derived on read** - selected cell, selected clue and dimensions are
//!    recomputed from the latest state every time.
//!
//! 3. **No rendering or loading** - documents come in, snapshots go out.
//!
//! # Example
//!
//! ```rust
//! use crossword_state::{Direction, KeyOutcome, PuzzleDocument, PuzzleState};
//!
//! let doc = PuzzleDocument::from_json(r#"{
//!     "board": [{
//!         "cells": [
//!             {"answer": "O", "type": 1, "clues": [0], "label": "1"},
//!             {"answer": "K", "type": 1, "clues": [0]}
//!         ],
//!         "clueLists": [{"name": "Across", "clues": [0]}, {"name": "Down", "clues": []}],
//!         "clues": [{"cells": [0, 1], "direction": "Across", "label": "1"}],
//!         "dimensions": {"width": 2, "height": 1}
//!     }]
//! }"#).unwrap();
//!
//! let mut state = PuzzleState::from_document(doc);
//! assert_eq!(state.handle_key("o"), KeyOutcome::Entered { cell: 0, moved_to: Some(1) });
//! assert_eq!(state.handle_key("ArrowDown"), KeyOutcome::ModeChanged(Direction::Down));
//! assert_eq!(state.current_cell_id(), 1);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
