//! Sliding-tile puzzle core.
//!
//! Provides the board model, the parity solvability test, a guaranteed-solvable
//! shuffler and an optimal A* solver for N×N boards. Rendering and input are
//! left to the caller.

pub mod error;
pub mod parity;
pub mod puzzle;
pub mod shuffle;
pub mod solver;

pub use error::PuzzleError;
pub use parity::is_solvable;
pub use puzzle::{Grid, Move, Position, Tile};
pub use shuffle::{shuffle_solvable, shuffle_solvable_with, DEFAULT_SHUFFLE_STEPS};
pub use solver::{solve, solve_with, SearchStats};
