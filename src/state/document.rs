//! Puzzle document model.
//!
//! The document is produced by an external loader and treated as immutable
//! input. Only board 0 is used by the navigation state.

use serde::{Deserialize, Deserializer, Serialize};

/// Traversal direction for clues and the highlight mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Across => "Across",
            Self::Down => "Down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root of a loaded puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub board: Vec<Board>,
}

impl PuzzleDocument {
    /// Parse a document from its JSON form.
    ///
    /// A document without any board is rejected here, since there is
    /// nothing to navigate.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let doc: Self = serde_json::from_str(text)?;
        if doc.board.is_empty() {
            return Err(DocumentError::NoBoards);
        }
        Ok(doc)
    }

    /// The board the navigation state operates on.
    pub fn primary_board(&self) -> Option<&Board> {
        self.board.first()
    }
}

/// One board: cells in row-major order, clue table, and clue lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub cells: Vec<CellSpec>,
    #[serde(default)]
    pub clue_lists: Vec<ClueList>,
    #[serde(default)]
    pub clues: Vec<Clue>,
    pub dimensions: Dimensions,
}

impl Board {
    /// Clue identifiers listed for a direction. Empty if the list is absent.
    pub fn clue_list(&self, direction: Direction) -> &[usize] {
        self.clue_lists
            .iter()
            .find(|list| list.name == direction)
            .map(|list| list.clues.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a clue by its index in the clue table.
    pub fn clue(&self, id: usize) -> Option<&Clue> {
        self.clues.get(id)
    }
}

/// Cell as it appears in the document, before derivation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellSpec {
    #[serde(default)]
    pub answer: Option<String>,
    /// `Some(1)` marks a playable cell; anything else is blocked.
    #[serde(default, rename = "type", deserialize_with = "lenient_kind")]
    pub kind: Option<i64>,
    #[serde(default)]
    pub clues: Option<Vec<usize>>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Accept any JSON value for a cell type. Integral numbers (including
/// `1.0`) are kept; anything else reads as absent.
fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| {
        v.as_i64().or_else(|| {
            v.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < MAX_EXACT)
                .map(|f| f as i64)
        })
    }))
}

/// The clue identifiers active in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueList {
    pub name: Direction,
    #[serde(default)]
    pub clues: Vec<usize>,
}

/// A single clue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Cell ids in traversal order. Not necessarily ascending.
    pub cells: Vec<usize>,
    pub direction: Direction,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub text: String,
    /// Linked clues. Ignored by navigation.
    #[serde(default)]
    pub relatives: Option<Vec<usize>>,
}

impl Clue {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "label": self.label,
            "direction": self.direction.as_str(),
            "text": self.text,
            "cells": self.cells
        })
    }
}

/// Board size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// Errors from reading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed puzzle document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("puzzle document has no boards")]
    NoBoards,
}
