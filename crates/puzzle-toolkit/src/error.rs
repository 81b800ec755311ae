//! Error types shared by the parsers and the search routines.

use thiserror::Error;

use crate::grid::Position;

/// Errors surfaced by a single solve call.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text did not have the expected shape.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A grid was parsed but lacks something the puzzle needs.
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },

    /// A traversal was asked to start outside the grid.
    #[error("position ({}, {}) lies outside the {width}x{height} grid", .position.x, .position.y)]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    /// The ordering constraints among the given items contain a cycle.
    #[error("ordering constraints contain a cycle through {item}")]
    Cycle { item: String },

    /// An item to be ordered was listed more than once.
    #[error("item {item} is listed more than once")]
    DuplicateItem { item: String },

    /// Reading the puzzle input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = Error::malformed(3, "expected a number, found \"x\"");
        assert_eq!(
            err.to_string(),
            "malformed input on line 3: expected a number, found \"x\""
        );

        let err = Error::OutOfBounds {
            position: Position::new(4, -1),
            width: 3,
            height: 2,
        };
        assert_eq!(err.to_string(), "position (4, -1) lies outside the 3x2 grid");
    }
}
