//! Inversion-parity solvability test.

use crate::puzzle::{Grid, Tile};

/// Counts pairs `i < j` with `tiles[i] > tiles[j]`, ignoring the blank.
pub fn count_inversions(tiles: &[Tile]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Whether `grid` can reach the goal through legal moves.
///
/// Odd widths: the inversion count must be even. Even widths: the inversion
/// count plus the blank's row counted from the bottom must be even, because a
/// vertical move flips both parities at once.
pub fn is_solvable(grid: &Grid) -> bool {
    let size = grid.size();
    let inversions = count_inversions(grid.cells());

    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        let Ok(blank) = grid.find_blank() else {
            return false;
        };
        let blank_row_from_bottom = size - 1 - blank.row;
        (inversions + blank_row_from_bottom) % 2 == 0
    }
}
