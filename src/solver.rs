//! Optimal solver: A* over board states with the Manhattan-distance heuristic.
//!
//! - Frontier: min-heap keyed by `(g + h, g, discovery order)`
//! - Closed set: `FxHashSet` of expanded boards, each board expanded once
//! - Nodes live in an arena; the path is rebuilt from parent links on success
//!
//! The heuristic is consistent for unit-cost slides, so the first goal popped
//! is at optimal depth. Without pattern databases the state space explodes
//! past 5x5, see [`SOLVER_SIZE_CEILING`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::error::PuzzleError;
use crate::parity::is_solvable;
use crate::puzzle::{Grid, Move};

/// Largest board the unbounded search is expected to finish on.
pub const SOLVER_SIZE_CEILING: usize = 5;

/// Counters reported to the progress callback and logged on completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards taken off the frontier and expanded.
    pub expanded: usize,
    /// Boards pushed onto the frontier, the start included.
    pub generated: usize,
    /// Entries currently waiting in the frontier.
    pub frontier: usize,
}

/// Sum over non-blank tiles of the row plus column distance to their goal cell.
pub fn manhattan_distance(grid: &Grid) -> usize {
    let size = grid.size();
    grid.cells()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(index, &tile)| {
            let target = tile as usize - 1;
            (index / size).abs_diff(target / size) + (index % size).abs_diff(target % size)
        })
        .sum()
}

/// A discovered board and how the search got there.
struct Node {
    grid: Grid,
    parent: Option<usize>,
    via: Option<Move>,
    cost: usize,
}

/// Frontier key. Field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    estimate: usize,
    cost: usize,
    /// Arena index, which doubles as the FIFO tie-break.
    node: usize,
}

/// Finds a minimum-length move sequence from `start` to the goal.
///
/// Returns `Ok(None)` when `start` is in the unsolvable parity class.
pub fn solve(start: &Grid) -> Result<Option<Vec<Move>>, PuzzleError> {
    solve_with(start, |_| true)
}

/// Like [`solve`], but asks `keep_going` before every expansion.
///
/// Returning `false` aborts with [`PuzzleError::SearchCancelled`], which lets
/// callers enforce a deadline or an expansion budget.
pub fn solve_with<F>(start: &Grid, mut keep_going: F) -> Result<Option<Vec<Move>>, PuzzleError>
where
    F: FnMut(&SearchStats) -> bool,
{
    start.find_blank()?;

    let size = start.size();
    if size > SOLVER_SIZE_CEILING {
        warn!(
            "Solving a {size}x{size} board: the search is only practical up to \
             {SOLVER_SIZE_CEILING}x{SOLVER_SIZE_CEILING} and may not finish"
        );
    }
    if !is_solvable(start) {
        debug!("Start board is in the unsolvable parity class");
        return Ok(None);
    }

    let mut nodes = vec![Node {
        grid: start.clone(),
        parent: None,
        via: None,
        cost: 0,
    }];
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        estimate: manhattan_distance(start),
        cost: 0,
        node: 0,
    }));
    let mut closed: FxHashSet<Grid> = FxHashSet::default();
    let mut stats = SearchStats {
        generated: 1,
        ..SearchStats::default()
    };

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = &nodes[entry.node];

        // stale entry: a cheaper copy of this board was already expanded
        if closed.contains(&current.grid) {
            continue;
        }

        if current.grid.is_goal() {
            stats.frontier = frontier.len();
            debug!("Solved in {} moves, {stats:?}", current.cost);
            return Ok(Some(rebuild_path(&nodes, entry.node)));
        }

        stats.frontier = frontier.len();
        if !keep_going(&stats) {
            debug!("Search cancelled, {stats:?}");
            return Err(PuzzleError::SearchCancelled {
                expanded: stats.expanded,
            });
        }

        let grid = current.grid.clone();
        let cost = current.cost + 1;
        let blank = grid.find_blank()?;

        for direction in Move::ALL {
            let Some(next) = grid.successor(blank, direction) else {
                continue;
            };
            if closed.contains(&next) {
                continue;
            }

            let index = nodes.len();
            frontier.push(Reverse(FrontierEntry {
                estimate: cost + manhattan_distance(&next),
                cost,
                node: index,
            }));
            nodes.push(Node {
                grid: next,
                parent: Some(entry.node),
                via: Some(direction),
                cost,
            });
            stats.generated += 1;
        }

        closed.insert(grid);
        stats.expanded += 1;
    }

    debug!("Frontier exhausted without reaching the goal, {stats:?}");
    Ok(None)
}

/// Walks parent links back from `goal` and returns the moves in play order.
fn rebuild_path(nodes: &[Node], goal: usize) -> Vec<Move> {
    let mut path = Vec::with_capacity(nodes[goal].cost);
    let mut index = goal;

    while let (Some(parent), Some(direction)) = (nodes[index].parent, nodes[index].via) {
        path.push(direction);
        index = parent;
    }

    path.reverse();
    path
}
