//! Selection and navigation state.
//!
//! # Key handling
//!
//! ```text
//!  arrow(dir, step)
//!        │
//!        ├── mode != dir ──▶ mode = dir            (cursor stays)
//!        │
//!        └── mode == dir ──▶ move(step)
//!
//!  char(c) ──▶ write upper(c) into selected cell ──▶ move(Forward)
//!
//!  move(step), along the clue the selected cell has in `mode`:
//!        interior        ──▶ next slot of the clue's cell sequence
//!        last & Forward  ──▶ first clue-bearing cell further along the line
//!        first & Backward──▶ nearest clue-bearing cell earlier on the line
//!        no clue / none  ──▶ stay
//! ```
//!
//! Derived values (`selected_cell`, `selected_clue`, dimensions, clue
//! lists) are computed on every read, so they always reflect the latest
//! document, cells, selection and mode.

use super::cell::{blank_cells, generate_cells, Cell};
use super::config::StateConfig;
use super::document::{Board, Clue, Direction, PuzzleDocument};
use super::input::{KeyInput, Step};

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Highlight mode switched; the cursor did not move
    ModeChanged(Direction),
    /// Cursor moved within the current mode
    Moved { from: usize, to: usize },
    /// Move requested but there was no target
    Stayed,
    /// Character written into `cell`, followed by a forward move
    Entered { cell: usize, moved_to: Option<usize> },
    /// Key not handled
    Ignored,
}

/// Crossword selection state machine.
///
/// Owns the current document, the derived cells, the selected cell id and
/// the highlight mode. Nothing here fails: boundary conditions leave the
/// selection where it is.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    config: StateConfig,
    document: Option<PuzzleDocument>,
    cells: Vec<Cell>,
    current_cell_id: usize,
    highlight_mode: Direction,
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleState {
    /// Create an empty-board state with default sizing.
    pub fn new() -> Self {
        Self::with_config(StateConfig::default())
    }

    pub fn with_config(config: StateConfig) -> Self {
        let mut state = Self {
            config,
            document: None,
            cells: Vec::new(),
            current_cell_id: 0,
            highlight_mode: Direction::Across,
        };
        state.set_puzzle(None);
        state
    }

    /// Create a state with a document already loaded.
    pub fn from_document(doc: PuzzleDocument) -> Self {
        let mut state = Self::new();
        state.set_puzzle(Some(doc));
        state
    }

    /// Replace the document and regenerate every cell.
    ///
    /// `None`, or a document without boards, gives the blank grid. The
    /// selected id is kept; if it no longer exists, `selected_cell` falls
    /// back to the first cell.
    pub fn set_puzzle(&mut self, doc: Option<PuzzleDocument>) {
        self.document = doc.filter(|d| d.primary_board().is_some());
        self.cells = match self.board() {
            Some(board) => {
                let (width, _) = self.resolved_dimensions(board);
                generate_cells(board, width)
            }
            None => {
                let (width, height) = self.config.blank_dimensions();
                blank_cells(width, height)
            }
        };
        tracing::debug!(
            cells = self.cells.len(),
            loaded = self.document.is_some(),
            "puzzle replaced"
        );
    }

    pub fn document(&self) -> Option<&PuzzleDocument> {
        self.document.as_ref()
    }

    fn board(&self) -> Option<&Board> {
        self.document.as_ref().and_then(|d| d.primary_board())
    }

    fn resolved_dimensions(&self, board: &Board) -> (usize, usize) {
        self.config
            .resolve(board.dimensions.width, board.dimensions.height)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        match self.board() {
            Some(board) => self.resolved_dimensions(board).0,
            None => self.config.blank_dimensions().0,
        }
    }

    pub fn height(&self) -> usize {
        match self.board() {
            Some(board) => self.resolved_dimensions(board).1,
            None => self.config.blank_dimensions().1,
        }
    }

    pub fn highlight_mode(&self) -> Direction {
        self.highlight_mode
    }

    pub fn current_cell_id(&self) -> usize {
        self.current_cell_id
    }

    /// Clue ids active in a direction. Empty without a document.
    pub fn clue_list(&self, direction: Direction) -> &[usize] {
        self.board()
            .map(|board| board.clue_list(direction))
            .unwrap_or(&[])
    }

    /// Look up a clue on board 0.
    pub fn clue(&self, id: usize) -> Option<&Clue> {
        self.board().and_then(|board| board.clue(id))
    }

    fn selected_index(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.id == self.current_cell_id)
            .or_else(|| (!self.cells.is_empty()).then_some(0))
    }

    /// The selected cell, or the first cell if the id is stale.
    ///
    /// `None` only when the grid has no cells at all.
    pub fn selected_cell(&self) -> Option<&Cell> {
        self.selected_index().map(|idx| &self.cells[idx])
    }

    /// The clue the selected cell belongs to in the current mode.
    pub fn selected_clue(&self) -> Option<&Clue> {
        let cell = self.selected_cell()?;
        self.clue_for(cell, self.highlight_mode)
    }

    /// Cell ids of the selected clue, for highlighting.
    pub fn highlighted_cells(&self) -> &[usize] {
        self.selected_clue()
            .map(|clue| clue.cells.as_slice())
            .unwrap_or(&[])
    }

    fn clue_for(&self, cell: &Cell, direction: Direction) -> Option<&Clue> {
        let clue_id = cell.clue_in(self.clue_list(direction))?;
        let clue = self.clue(clue_id);
        if clue.is_none() {
            tracing::warn!(clue_id, cell = cell.id, "clue listed but missing from clue table");
        }
        clue
    }

    /// Jump straight to a cell.
    pub fn select_cell(&mut self, cell: &Cell) {
        self.current_cell_id = cell.id;
    }

    /// Parse a host key identifier and handle it.
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        self.handle_key_input(KeyInput::from_key_name(key))
    }

    /// Apply one key event.
    pub fn handle_key_input(&mut self, key: KeyInput) -> KeyOutcome {
        if let Some((direction, step)) = key.arrow() {
            return self.handle_arrow(direction, step);
        }

        match key {
            KeyInput::Char(c) => {
                let Some(cell) = self.enter_char(c) else {
                    return KeyOutcome::Ignored;
                };
                let moved_to = self.move_in_current_direction(Step::Forward);
                KeyOutcome::Entered { cell, moved_to }
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn handle_arrow(&mut self, direction: Direction, step: Step) -> KeyOutcome {
        if self.highlight_mode != direction {
            tracing::debug!(from = %self.highlight_mode, to = %direction, "highlight mode changed");
            self.highlight_mode = direction;
            return KeyOutcome::ModeChanged(direction);
        }

        let from = self.current_cell_id;
        match self.move_in_current_direction(step) {
            Some(to) => KeyOutcome::Moved { from, to },
            None => KeyOutcome::Stayed,
        }
    }

    /// Write `c`, uppercased, into the selected cell. Returns its id.
    fn enter_char(&mut self, c: char) -> Option<usize> {
        let idx = self.selected_index()?;
        let cell = &mut self.cells[idx];
        cell.user_input = c.to_uppercase().collect();
        tracing::debug!(cell = cell.id, input = %cell.user_input, "cell input");
        Some(cell.id)
    }

    /// Move one step in the highlight mode. Returns the new cell id.
    fn move_in_current_direction(&mut self, step: Step) -> Option<usize> {
        let target = self.next_cell_id(step);
        match target {
            Some(id) => {
                tracing::debug!(from = self.current_cell_id, to = id, mode = %self.highlight_mode, "cursor moved");
                self.current_cell_id = id;
            }
            None => {
                tracing::debug!(cell = self.current_cell_id, mode = %self.highlight_mode, ?step, "no cell to move to");
            }
        }
        target
    }

    fn next_cell_id(&self, step: Step) -> Option<usize> {
        let current = self.selected_cell()?;
        let clue = self.clue_for(current, self.highlight_mode)?;

        let Some(idx) = clue.cells.iter().position(|&id| id == current.id) else {
            // Forward re-enters the clue at its start; backward has nowhere to go.
            tracing::warn!(cell = current.id, ?step, "cell not found in its own clue");
            return match step {
                Step::Forward => clue
                    .cells
                    .first()
                    .copied()
                    .filter(|&id| self.has_cell(id)),
                Step::Backward => None,
            };
        };

        // A single-cell clue is both first and last, so it always searches.
        let next = match step {
            Step::Forward if idx + 1 == clue.cells.len() => {
                return self.search_line(current, step);
            }
            Step::Backward if idx == 0 => return self.search_line(current, step),
            Step::Forward => clue.cells.get(idx + 1),
            Step::Backward => clue.cells.get(idx - 1),
        };

        next.copied().filter(|&id| self.has_cell(id))
    }

    fn has_cell(&self, id: usize) -> bool {
        self.cells.iter().any(|cell| cell.id == id)
    }

    /// Find the next clue-bearing cell on the selected cell's row (Across)
    /// or column (Down), scanning away from it in the direction of `step`.
    fn search_line(&self, current: &Cell, step: Step) -> Option<usize> {
        let mode = self.highlight_mode;
        let clue_ids = self.clue_list(mode);
        let (line, pos) = line_position(current, mode);

        let candidate = |cell: &&Cell| {
            let (cell_line, cell_pos) = line_position(cell, mode);
            let ahead = if step.is_forward() {
                cell_pos > pos
            } else {
                cell_pos < pos
            };
            cell_line == line && ahead && cell.is_playable() && cell.in_any(clue_ids)
        };

        let found = if step.is_forward() {
            self.cells.iter().find(candidate)
        } else {
            self.cells.iter().rev().find(candidate)
        };
        found.map(|cell| cell.id)
    }

    /// Snapshot for a rendering layer.
    pub fn to_json(&self) -> serde_json::Value {
        let highlighted = self.highlighted_cells();
        let cells: Vec<serde_json::Value> = self
            .cells
            .iter()
            .map(|cell| {
                let mut obj = cell.to_json();
                obj["highlighted"] = serde_json::json!(highlighted.contains(&cell.id));
                obj
            })
            .collect();

        serde_json::json!({
            "width": self.width(),
            "height": self.height(),
            "highlight_mode": self.highlight_mode.as_str(),
            "current_cell_id": self.selected_cell().map(|c| c.id),
            "selected_clue": self.selected_clue().map(|c| c.to_json()),
            "cells": cells
        })
    }
}

/// (line, position along the line) for a direction.
fn line_position(cell: &Cell, direction: Direction) -> (usize, usize) {
    match direction {
        Direction::Across => (cell.row, cell.col),
        Direction::Down => (cell.col, cell.row),
    }
}
