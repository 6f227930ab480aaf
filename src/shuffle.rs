//! Random-walk scrambler.
//!
//! The walk starts at the goal and only ever takes legal moves, so its result
//! stays in the goal's parity class. The `is_solvable` re-check after each
//! walk can therefore never fail; it is kept as a cheap consistency check with
//! a bounded number of fresh attempts.

use log::{debug, error, warn};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::parity::is_solvable;
use crate::puzzle::{Grid, Move, Position};

/// Random moves per shuffle, regardless of board size.
pub const DEFAULT_SHUFFLE_STEPS: usize = 1000;

const MAX_SHUFFLE_ATTEMPTS: usize = 8;

/// Scrambles a `size`×`size` board with [`DEFAULT_SHUFFLE_STEPS`] random moves.
///
/// # Panics
/// Panics if `size` is outside `2..=255`.
pub fn shuffle_solvable(size: usize) -> Grid {
    shuffle_solvable_with(size, DEFAULT_SHUFFLE_STEPS, &mut thread_rng())
}

/// Scrambles a board with `steps` random legal moves drawn from `rng`.
///
/// The output is deterministic for a given seed.
///
/// # Panics
/// Panics if `size` is outside `2..=255`.
pub fn shuffle_solvable_with<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> Grid {
    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        let candidate = random_walk(size, steps, rng);
        if is_solvable(&candidate) {
            debug!("Shuffled {size}x{size} board in {steps} steps (attempt {attempt})");
            return candidate;
        }
        warn!("Shuffle attempt {attempt} left the goal's parity class, retrying");
    }

    error!("No solvable shuffle after {MAX_SHUFFLE_ATTEMPTS} attempts, using the goal board");
    Grid::goal(size)
}

/// Walks the blank `steps` times from the goal, uniformly over legal moves.
fn random_walk<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::goal(size);
    let mut blank = Position::new(size - 1, size - 1);
    let mut choices: Vec<Move> = Vec::with_capacity(4);

    for _ in 0..steps {
        choices.clear();
        choices.extend(grid.moves_from(blank));

        let Some(&direction) = choices.choose(rng) else {
            break;
        };
        if let Some(target) = grid.neighbor(blank, direction) {
            grid = grid.swapped(blank, target);
            blank = target;
        }
    }

    grid
}
