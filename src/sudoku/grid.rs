//! The 9×9 grid model.
//!
//! A [`Grid`] is a flat, index-addressed array of 81 cells in row-major
//! order. Each cell holds either [`EMPTY`] (`0`) or a digit `1..=9`.
//! The grid is exclusively owned by whichever strategy invocation is
//! currently solving it and is mutated in place during search; a failed
//! search unwinds every trial placement, so the grid is restored to its
//! pre-call state on total failure.
//!
//! Parsing accepts the usual one-line encoding: 81 characters
//! `'0'..='9'`, `'0'` meaning empty. Parsing does *not* check that the
//! given clues are internally consistent — the engine searches whatever
//! it is handed and simply finds no solution for contradictory clues.

use crate::sudoku::error::SolveError;
use std::fmt;
use std::str::FromStr;

/// Cells per row, rows per grid.
pub const SIZE: usize = 9;

/// Side length of one of the nine non-overlapping 3×3 blocks.
pub const BLOCK: usize = 3;

/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// The value of an empty cell.
pub const EMPTY: u8 = 0;

/// A `(row, column)` pair, 0-indexed, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index in `0..9`.
    pub row: usize,
    /// Column index in `0..9`.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position from a flat row-major cell index in `0..81`.
    #[must_use]
    pub const fn from_cell(cell: usize) -> Self {
        Self {
            row: cell / SIZE,
            col: cell % SIZE,
        }
    }

    /// The flat row-major cell index of this position.
    #[must_use]
    pub const fn cell(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Index in `0..9` of the 3×3 block containing this position,
    /// numbered row-major across blocks.
    #[must_use]
    pub const fn block(self) -> usize {
        (self.row / BLOCK) * BLOCK + self.col / BLOCK
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 9×9 puzzle grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid([u8; CELLS]);

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self([EMPTY; CELLS])
    }

    /// Parses an 81-character one-line puzzle encoding.
    ///
    /// Characters must all be `'0'..='9'`, `'0'` meaning empty, row-major
    /// from the top-left cell.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::PuzzleLength`] if the input is not exactly
    /// 81 characters, and [`SolveError::PuzzleCharacter`] for the first
    /// character that is not a digit. No partial grid is produced.
    pub fn from_line(s: &str) -> Result<Self, SolveError> {
        let len = s.chars().count();
        if len != CELLS {
            return Err(SolveError::PuzzleLength(len));
        }

        let mut cells = [EMPTY; CELLS];
        for (index, ch) in s.chars().enumerate() {
            match ch.to_digit(10) {
                Some(digit) => cells[index] = digit as u8,
                None => return Err(SolveError::PuzzleCharacter { index, found: ch }),
            }
        }
        Ok(Self(cells))
    }

    /// Serializes the grid back to the 81-character one-line encoding.
    ///
    /// Total inverse of [`Grid::from_line`]: any in-memory grid
    /// round-trips exactly.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.0.iter().map(|&v| char::from(b'0' + v)).collect()
    }

    /// The value at `pos`: [`EMPTY`] or a digit `1..=9`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> u8 {
        self.0[pos.cell()]
    }

    /// Places `digit` at `pos`, overwriting whatever was there.
    pub const fn set(&mut self, pos: Position, digit: u8) {
        self.0[pos.cell()] = digit;
    }

    /// Resets the cell at `pos` to empty. Used when backtracking out of
    /// a failed trial placement.
    pub const fn clear(&mut self, pos: Position) {
        self.0[pos.cell()] = EMPTY;
    }

    /// Whether the cell at `pos` is empty.
    #[must_use]
    pub const fn is_free(&self, pos: Position) -> bool {
        self.get(pos) == EMPTY
    }

    /// Read-only view of the values in row `row`, left to right.
    pub fn row_values(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        (0..SIZE).map(move |col| self.get(Position::new(row, col)))
    }

    /// Read-only view of the values in column `col`, top to bottom.
    pub fn col_values(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        (0..SIZE).map(move |row| self.get(Position::new(row, col)))
    }

    /// Read-only view of the values in block `block` (see
    /// [`Position::block`] for the numbering), row-major within the block.
    pub fn block_values(&self, block: usize) -> impl Iterator<Item = u8> + '_ {
        let top = (block / BLOCK) * BLOCK;
        let left = (block % BLOCK) * BLOCK;
        (0..SIZE).map(move |i| self.get(Position::new(top + i / BLOCK, left + i % BLOCK)))
    }

    /// Row-major scan for the first empty cell.
    ///
    /// This is the canonical "next cell" selector shared by the
    /// strategies; none of them picks the most-constrained cell
    /// dynamically.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.0
            .iter()
            .position(|&v| v == EMPTY)
            .map(Position::from_cell)
    }

    /// All empty cells in row-major order.
    ///
    /// The list is fixed at the moment of the call; exhaustive
    /// strategies walk it by depth rather than re-scanning the grid.
    #[must_use]
    pub fn free_cells(&self) -> Vec<Position> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == EMPTY)
            .map(|(cell, _)| Position::from_cell(cell))
            .collect()
    }

    /// Whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|&v| v != EMPTY)
    }

    /// Whether the grid is a fully solved, valid puzzle: no empty cells
    /// and each row, column and block contains each digit exactly once.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        const FULL: u16 = 0b1_1111_1110; // bits 1..=9 set

        let house_mask = |values: &mut dyn Iterator<Item = u8>| -> u16 {
            values
                .filter(|&v| v != EMPTY)
                .fold(0u16, |mask, v| mask | 1 << v)
        };

        self.is_complete()
            && (0..SIZE).all(|i| {
                house_mask(&mut self.row_values(i)) == FULL
                    && house_mask(&mut self.col_values(i)) == FULL
                    && house_mask(&mut self.block_values(i)) == FULL
            })
    }
}

impl FromStr for Grid {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as nine rows of nine characters with blank
    /// cells shown as `.`, blocks separated for readability.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 && row % BLOCK == 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..SIZE {
                if col > 0 && col % BLOCK == 0 {
                    write!(f, "|")?;
                }
                match self.get(Position::new(row, col)) {
                    EMPTY => write!(f, ".")?,
                    v => write!(f, "{v}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "070000043040009610800634900094052000358460020000800530080070091902100005007040802";

    #[test]
    fn test_parse_and_serialize_round_trip() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        assert_eq!(grid.to_line(), PUZZLE);
    }

    #[test]
    fn test_round_trip_all_empty_and_all_filled() {
        let empty = "0".repeat(CELLS);
        let grid = Grid::from_line(&empty).unwrap();
        assert_eq!(grid.to_line(), empty);

        let filled = "123456789".repeat(SIZE);
        let grid = Grid::from_line(&filled).unwrap();
        assert_eq!(grid.to_line(), filled);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            Grid::from_line("123"),
            Err(SolveError::PuzzleLength(3)),
        );
        let too_long = "0".repeat(CELLS + 1);
        assert_eq!(
            Grid::from_line(&too_long),
            Err(SolveError::PuzzleLength(CELLS + 1)),
        );
    }

    #[test]
    fn test_parse_rejects_non_digit() {
        let mut bad = "0".repeat(CELLS);
        bad.replace_range(40..41, "x");
        assert_eq!(
            Grid::from_line(&bad),
            Err(SolveError::PuzzleCharacter {
                index: 40,
                found: 'x'
            }),
        );
    }

    #[test]
    fn test_parse_does_not_check_clue_consistency() {
        // Two 5s in the first row: structurally legal input, unsolvable puzzle.
        let mut clues = "0".repeat(CELLS);
        clues.replace_range(0..2, "55");
        assert!(Grid::from_line(&clues).is_ok());
    }

    #[test]
    fn test_position_round_trip_and_block() {
        for cell in 0..CELLS {
            assert_eq!(Position::from_cell(cell).cell(), cell);
        }
        assert_eq!(Position::new(0, 0).block(), 0);
        assert_eq!(Position::new(4, 4).block(), 4);
        assert_eq!(Position::new(8, 8).block(), 8);
        assert_eq!(Position::new(0, 8).block(), 2);
        assert_eq!(Position::new(8, 0).block(), 6);
    }

    #[test]
    fn test_first_empty_edges() {
        assert_eq!(Grid::empty().first_empty(), Some(Position::new(0, 0)));

        let filled = Grid::from_line(&"123456789".repeat(SIZE)).unwrap();
        assert_eq!(filled.first_empty(), None);
    }

    #[test]
    fn test_free_cells_are_row_major() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        let free = grid.free_cells();
        assert!(free.windows(2).all(|w| w[0] < w[1]));
        assert!(free.iter().all(|&pos| grid.is_free(pos)));
        let occupied = CELLS - free.len();
        assert_eq!(occupied, PUZZLE.bytes().filter(|&b| b != b'0').count());
    }

    #[test]
    fn test_row_col_block_views() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        let row0: Vec<u8> = grid.row_values(0).collect();
        assert_eq!(row0, [0, 7, 0, 0, 0, 0, 0, 4, 3]);
        let col0: Vec<u8> = grid.col_values(0).collect();
        assert_eq!(col0, [0, 0, 8, 0, 3, 0, 0, 9, 0]);
        let block0: Vec<u8> = grid.block_values(0).collect();
        assert_eq!(block0, [0, 7, 0, 0, 4, 0, 8, 0, 0]);
    }

    #[test]
    fn test_is_valid_solution() {
        const SOLUTION: &str =
            "679518243543729618821634957794352186358461729216897534485276391962183475137945862";
        let grid = Grid::from_line(SOLUTION).unwrap();
        assert!(grid.is_valid_solution());

        // A repeated digit in one row breaks validity.
        let mut bad = SOLUTION.to_string();
        bad.replace_range(1..2, "6");
        assert!(!Grid::from_line(&bad).unwrap().is_valid_solution());

        // Incomplete grids are never valid solutions.
        assert!(!Grid::from_line(PUZZLE).unwrap().is_valid_solution());
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let rendered = Grid::empty().to_string();
        assert!(rendered.contains("...|...|..."));
        assert!(rendered.contains("---+---+---"));
    }
}
