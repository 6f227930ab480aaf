//! Error type shared by the grid model and the solver.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::puzzle::{Move, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The blank has no neighbor in the requested direction.
    IllegalMove { direction: Move, blank: Position },

    /// A grid broke the one-blank permutation invariant. Indicates a bug
    /// upstream, not bad user input.
    InvariantViolation(String),

    /// Board size outside `2..=255`.
    InvalidSize(usize),

    /// Caller-supplied tiles do not form a valid board.
    InvalidGrid(String),

    /// The search was stopped by its progress callback.
    SearchCancelled { expanded: usize },
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::IllegalMove { direction, blank } => {
                write!(f, "illegal move {direction}: blank at {blank} is on the edge")
            }
            PuzzleError::InvariantViolation(reason) => {
                write!(f, "grid invariant violated: {reason}")
            }
            PuzzleError::InvalidSize(size) => {
                write!(f, "board size {size} is not supported (expected 2..=255)")
            }
            PuzzleError::InvalidGrid(reason) => write!(f, "invalid grid: {reason}"),
            PuzzleError::SearchCancelled { expanded } => {
                write!(f, "search cancelled after expanding {expanded} states")
            }
        }
    }
}

impl Error for PuzzleError {}
