//! Grid model for the N×N sliding-tile puzzle.
//!
//! A [`Grid`] is an immutable, row-major permutation of `0..N²` where `0` is
//! the blank. Every transformation returns a new grid, so search code can keep
//! any number of snapshots alive at once.

use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// A tile label. `0` is the blank.
pub type Tile = u16;

/// Smallest supported board.
pub const MIN_SIZE: usize = 2;

/// Largest board whose labels fit in a [`Tile`].
pub const MAX_SIZE: usize = 255;

/// A `(row, col)` cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction the blank travels. The tile on that side slides into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction, in successor-generation order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// `(row, col)` delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Label that belongs at a row-major index of the goal grid.
#[inline]
fn goal_tile(index: usize, cell_count: usize) -> Tile {
    ((index + 1) % cell_count) as Tile
}

/// An N×N board state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Box<[Tile]>,
}

impl Grid {
    /// Builds the solved board: tiles `1..N²` in reading order, blank last.
    ///
    /// # Panics
    /// Panics if `size` is outside `2..=255`.
    pub fn goal(size: usize) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "size must be in range 2..=255"
        );
        let cell_count = size * size;
        let cells = (0..cell_count).map(|i| goal_tile(i, cell_count)).collect();
        Self { size, cells }
    }

    /// Rebuilds a grid from its row-major linearization.
    ///
    /// Fails unless `cells` holds every label in `0..size²` exactly once.
    pub fn unflatten(cells: &[Tile], size: usize) -> Result<Self, PuzzleError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidSize(size));
        }
        let cell_count = size * size;
        if cells.len() != cell_count {
            return Err(PuzzleError::InvalidGrid(format!(
                "expected {cell_count} tiles for a {size}x{size} board, got {}",
                cells.len()
            )));
        }

        let mut seen = vec![false; cell_count];
        for &tile in cells {
            let label = tile as usize;
            if label >= cell_count {
                return Err(PuzzleError::InvalidGrid(format!(
                    "tile {tile} is out of range for a {size}x{size} board"
                )));
            }
            if seen[label] {
                return Err(PuzzleError::InvalidGrid(format!("tile {tile} appears twice")));
            }
            seen[label] = true;
        }

        Ok(Self {
            size,
            cells: cells.into(),
        })
    }

    /// Builds a grid from explicit rows, which must form a square.
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, PuzzleError> {
        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidSize(size));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(PuzzleError::InvalidGrid(format!(
                "row {i} has {} tiles, expected {size}",
                row.len()
            )));
        }

        let flat: Vec<Tile> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::unflatten(&flat, size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of the tiles.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Row-major copy of the tiles, the inverse of [`Grid::unflatten`].
    pub fn flatten(&self) -> Vec<Tile> {
        self.cells.to_vec()
    }

    /// Tile at `pos`, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Tile> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    pub fn is_goal(&self) -> bool {
        let cell_count = self.cells.len();
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile == goal_tile(i, cell_count))
    }

    /// Locates the blank by scanning in reading order.
    pub fn find_blank(&self) -> Result<Position, PuzzleError> {
        self.cells
            .iter()
            .position(|&tile| tile == 0)
            .map(|i| Position::new(i / self.size, i % self.size))
            .ok_or_else(|| PuzzleError::InvariantViolation("grid has no blank cell".into()))
    }

    /// Cell the blank would land on after `direction`, if it is on the board.
    pub(crate) fn neighbor(&self, blank: Position, direction: Move) -> Option<Position> {
        let (dr, dc) = direction.as_offset();
        let row = blank.row.checked_add_signed(dr)?;
        let col = blank.col.checked_add_signed(dc)?;

        if row < self.size && col < self.size {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Directions available to a blank sitting at `blank`.
    pub(crate) fn moves_from(&self, blank: Position) -> impl Iterator<Item = Move> + '_ {
        Move::ALL
            .into_iter()
            .filter(move |&direction| self.neighbor(blank, direction).is_some())
    }

    /// Swaps the blank with `target` in a fresh copy.
    pub(crate) fn swapped(&self, blank: Position, target: Position) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(
            blank.row * self.size + blank.col,
            target.row * self.size + target.col,
        );
        Self {
            size: self.size,
            cells,
        }
    }

    /// Successor for a blank already known to sit at `blank`.
    pub(crate) fn successor(&self, blank: Position, direction: Move) -> Option<Self> {
        self.neighbor(blank, direction)
            .map(|target| self.swapped(blank, target))
    }

    /// The 2 to 4 directions the blank can currently take.
    pub fn legal_moves(&self) -> Result<Vec<Move>, PuzzleError> {
        let blank = self.find_blank()?;
        Ok(self.moves_from(blank).collect())
    }

    /// Returns the grid after sliding the blank one cell in `direction`.
    pub fn apply_move(&self, direction: Move) -> Result<Self, PuzzleError> {
        let blank = self.find_blank()?;
        self.successor(blank, direction)
            .ok_or(PuzzleError::IllegalMove { direction, blank })
    }

    /// Replays `path` move by move and returns the final grid.
    pub fn apply_path(&self, path: &[Move]) -> Result<Self, PuzzleError> {
        path.iter()
            .try_fold(self.clone(), |grid, &direction| grid.apply_move(direction))
    }

    /// Move that slides the tile at `cell` into the blank.
    ///
    /// `None` when `cell` is not orthogonally adjacent to the blank, which is
    /// how a click on a distant tile is ignored.
    pub fn move_toward(&self, cell: Position) -> Option<Move> {
        let blank = self.find_blank().ok()?;
        self.moves_from(blank)
            .find(|&direction| self.neighbor(blank, direction) == Some(cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.rows() {
            for (col, &val) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses rows separated by `/` or newlines, tiles by whitespace or commas.
///
/// `"1 2 3/4 5 6/7 8 0"` is the 3x3 goal.
impl FromStr for Grid {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|token| !token.is_empty())
                    .map(|token| {
                        token.parse::<Tile>().map_err(|_| {
                            PuzzleError::InvalidGrid(format!("'{token}' is not a tile label"))
                        })
                    })
                    .collect::<Result<Vec<Tile>, PuzzleError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[Tile]]) -> Grid {
        let rows: Vec<Vec<Tile>> = rows.iter().map(|row| row.to_vec()).collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_goal_layout_3x3() {
        let goal = Grid::goal(3);
        assert_eq!(goal.flatten(), vec![1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(goal.find_blank().unwrap(), Position::new(2, 2));
    }

    #[test]
    fn test_goal_is_goal_for_all_small_sizes() {
        for size in MIN_SIZE..=9 {
            assert!(Grid::goal(size).is_goal(), "goal({size}) should be the goal");
        }
    }

    #[test]
    #[should_panic(expected = "size must be in range")]
    fn test_goal_rejects_size_one() {
        Grid::goal(1);
    }

    #[test]
    fn test_non_goal_is_not_goal() {
        let state = grid(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]);
        assert!(!state.is_goal());
    }

    #[test]
    fn test_flatten_unflatten_roundtrip() {
        let state = grid(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let recovered = Grid::unflatten(&state.flatten(), 3).unwrap();
        assert_eq!(recovered, state);
    }

    #[test]
    fn test_unflatten_rejects_bad_input() {
        assert_eq!(
            Grid::unflatten(&[1, 2, 3, 0], 1),
            Err(PuzzleError::InvalidSize(1))
        );
        assert!(matches!(
            Grid::unflatten(&[1, 2, 3], 2),
            Err(PuzzleError::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::unflatten(&[1, 1, 3, 0], 2),
            Err(PuzzleError::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::unflatten(&[1, 2, 4, 0], 2),
            Err(PuzzleError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1, 2, 3], vec![4, 5], vec![7, 8, 0]];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(PuzzleError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_apply_move_down_reaches_goal() {
        let state = grid(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]);
        let next = state.apply_move(Move::Down).unwrap();
        assert!(next.is_goal());
        // the original is untouched
        assert_eq!(state.get(Position::new(1, 2)), Some(0));
    }

    #[test]
    fn test_apply_move_out_of_bounds_is_illegal() {
        let state = grid(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 8]]);
        assert_eq!(
            state.apply_move(Move::Up),
            Err(PuzzleError::IllegalMove {
                direction: Move::Up,
                blank: Position::new(0, 0),
            })
        );
        assert!(state.apply_move(Move::Left).is_err());
    }

    #[test]
    fn test_opposite_moves_cancel_out() {
        let state = grid(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        for direction in Move::ALL {
            let there = state.apply_move(direction).unwrap();
            let back = there.apply_move(direction.opposite()).unwrap();
            assert_eq!(back, state, "{direction} then its opposite should cancel");
        }
    }

    #[test]
    fn test_legal_moves_by_blank_position() {
        let corner = Grid::goal(3);
        assert_eq!(corner.legal_moves().unwrap(), vec![Move::Up, Move::Left]);

        let edge = grid(&[&[1, 0, 2], &[3, 4, 5], &[6, 7, 8]]);
        assert_eq!(
            edge.legal_moves().unwrap(),
            vec![Move::Down, Move::Left, Move::Right]
        );

        let center = grid(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        assert_eq!(center.legal_moves().unwrap().len(), 4);
    }

    #[test]
    fn test_move_toward_only_adjacent_cells() {
        let state = Grid::goal(3);
        assert_eq!(state.move_toward(Position::new(1, 2)), Some(Move::Up));
        assert_eq!(state.move_toward(Position::new(2, 1)), Some(Move::Left));
        assert_eq!(state.move_toward(Position::new(1, 1)), None);
        assert_eq!(state.move_toward(Position::new(0, 0)), None);
        assert_eq!(state.move_toward(Position::new(2, 2)), None);
    }

    #[test]
    fn test_apply_path_replays_moves() {
        let goal = Grid::goal(3);
        let scrambled = goal.apply_path(&[Move::Up, Move::Left, Move::Down]).unwrap();
        let restored = scrambled
            .apply_path(&[Move::Up, Move::Right, Move::Down])
            .unwrap();
        assert_eq!(restored, goal);

        assert!(goal.apply_path(&[Move::Up, Move::Down, Move::Down]).is_err());
    }

    #[test]
    fn test_parse_accepts_slashes_newlines_and_commas() {
        let expected = grid(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]);
        assert_eq!("1 2 3/4 5 0/7 8 6".parse::<Grid>().unwrap(), expected);
        assert_eq!("1,2,3\n4,5,0\n7,8,6\n".parse::<Grid>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "1 2 x/4 5 0/7 8 6".parse::<Grid>(),
            Err(PuzzleError::InvalidGrid(_))
        ));
        assert!(matches!(
            "1 2 3/4 5 0".parse::<Grid>(),
            Err(PuzzleError::InvalidGrid(_))
        ));
        assert!(matches!("0".parse::<Grid>(), Err(PuzzleError::InvalidSize(1))));
    }

    #[test]
    fn test_display_pads_to_widest_label() {
        assert_eq!(Grid::goal(3).to_string(), "1 2 3\n4 5 6\n7 8 0\n");
        assert_eq!(
            Grid::goal(4).to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  0\n"
        );
    }
}
