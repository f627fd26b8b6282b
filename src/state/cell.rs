//! Derived grid cells.
//!
//! Cells are regenerated in full from the document whenever it changes.
//! Only `user_input` is written afterwards.

use super::document::Board;

/// Cell `type` value marking a playable square.
pub const PLAYABLE: i64 = 1;

/// A grid cell with its derived position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Row-major index into the grid
    pub id: usize,
    pub row: usize,
    pub col: usize,
    /// Solution character, empty for blocked cells
    pub answer: String,
    pub kind: Option<i64>,
    /// Clue ids this cell belongs to
    pub clues: Vec<usize>,
    /// Display number if the cell starts a clue
    pub label: Option<String>,
    /// Player entry
    pub user_input: String,
}

impl Cell {
    /// Blank, clue-less, non-playable cell at `id`.
    pub fn blank(id: usize, width: usize) -> Self {
        Self {
            id,
            row: id / width,
            col: id % width,
            ..Self::default()
        }
    }

    pub fn is_playable(&self) -> bool {
        self.kind == Some(PLAYABLE)
    }

    /// Check if the cell belongs to any of the given clue ids.
    pub fn in_any(&self, clue_ids: &[usize]) -> bool {
        self.clues.iter().any(|id| clue_ids.contains(id))
    }

    /// First of this cell's clues that appears in `clue_ids`.
    pub fn clue_in(&self, clue_ids: &[usize]) -> Option<usize> {
        self.clues.iter().copied().find(|id| clue_ids.contains(id))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "row": self.row,
            "col": self.col,
            "label": self.label,
            "type": self.kind,
            "userInput": self.user_input
        })
    }
}

/// Build the cell array for a board.
///
/// `width` must be non-zero; callers resolve fallbacks first.
pub fn generate_cells(board: &Board, width: usize) -> Vec<Cell> {
    board
        .cells
        .iter()
        .enumerate()
        .map(|(id, spec)| Cell {
            id,
            row: id / width,
            col: id % width,
            answer: spec.answer.clone().unwrap_or_default(),
            kind: spec.kind,
            clues: spec.clues.clone().unwrap_or_default(),
            label: spec.label.clone(),
            user_input: String::new(),
        })
        .collect()
}

/// Build an empty `width` x `height` grid.
pub fn blank_cells(width: usize, height: usize) -> Vec<Cell> {
    (0..width * height).map(|id| Cell::blank(id, width)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::document::{CellSpec, Dimensions};
    use pretty_assertions::assert_eq;

    fn board(width: usize, height: usize) -> Board {
        let mut cells = vec![CellSpec::default(); width * height];
        cells[1] = CellSpec {
            answer: Some("Q".to_string()),
            kind: Some(PLAYABLE),
            clues: Some(vec![0, 3]),
            label: Some("1".to_string()),
        };
        Board {
            cells,
            clue_lists: Vec::new(),
            clues: Vec::new(),
            dimensions: Dimensions { width, height },
        }
    }

    #[test]
    fn test_generate_positions() {
        let cells = generate_cells(&board(4, 3), 4);
        assert_eq!(cells.len(), 12);
        for cell in &cells {
            assert_eq!(cell.id, cell.row * 4 + cell.col);
        }
        assert_eq!((cells[7].row, cells[7].col), (1, 3));
    }

    #[test]
    fn test_generate_copies_fields() {
        let cells = generate_cells(&board(4, 3), 4);
        assert_eq!(
            cells[1],
            Cell {
                id: 1,
                row: 0,
                col: 1,
                answer: "Q".to_string(),
                kind: Some(1),
                clues: vec![0, 3],
                label: Some("1".to_string()),
                user_input: String::new(),
            }
        );
        assert!(cells[0].answer.is_empty());
        assert!(cells[0].clues.is_empty());
        assert!(!cells[0].is_playable());
    }

    #[test]
    fn test_blank_cells() {
        let cells = blank_cells(15, 15);
        assert_eq!(cells.len(), 225);
        assert!(cells.iter().all(|c| c.clues.is_empty() && !c.is_playable()));
        assert_eq!((cells[224].row, cells[224].col), (14, 14));
    }

    #[test]
    fn test_clue_membership() {
        let cells = generate_cells(&board(4, 3), 4);
        assert!(cells[1].in_any(&[3, 9]));
        assert!(!cells[1].in_any(&[2]));
        assert_eq!(cells[1].clue_in(&[5, 3, 0]), Some(0));
        assert_eq!(cells[0].clue_in(&[0]), None);
    }
}
