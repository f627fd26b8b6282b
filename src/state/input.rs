//! Key input events.

use super::document::Direction;

/// A discrete key event from the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowRight,
    ArrowLeft,
    ArrowDown,
    ArrowUp,
    /// A single printable character
    Char(char),
    /// Anything else; ignored
    Other,
}

impl KeyInput {
    /// Parse a host key identifier such as `"ArrowLeft"` or `"a"`.
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowRight" => Self::ArrowRight,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from(c),
                    _ => Self::Other,
                }
            }
        }
    }

    /// Direction and step for an arrow key.
    pub fn arrow(&self) -> Option<(Direction, Step)> {
        match self {
            Self::ArrowRight => Some((Direction::Across, Step::Forward)),
            Self::ArrowLeft => Some((Direction::Across, Step::Backward)),
            Self::ArrowDown => Some((Direction::Down, Step::Forward)),
            Self::ArrowUp => Some((Direction::Down, Step::Backward)),
            _ => None,
        }
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        if c.is_control() {
            Self::Other
        } else {
            Self::Char(c)
        }
    }
}

/// One slot along a clue, forward or backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward)
    }
}
