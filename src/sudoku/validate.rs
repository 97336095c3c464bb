//! Single-cell placement legality.
//!
//! [`is_legal`] is the single source of truth for whether a digit may
//! occupy a cell. Every strategy calls it on every trial placement,
//! including strategies that already filtered candidates up front: a
//! precomputed candidate list goes stale as the grid mutates, so
//! re-validation at assignment time is mandatory, not redundant.

use crate::sudoku::grid::{BLOCK, Grid, Position, SIZE};

/// Returns `false` iff `digit` already occupies another cell in the same
/// row, the same column, or the same 3×3 block as `pos`.
///
/// The cell at exactly `pos` is excluded from the check, so a digit is
/// always legal at a cell it already occupies.
#[must_use]
pub fn is_legal(grid: &Grid, digit: u8, pos: Position) -> bool {
    for col in 0..SIZE {
        if col != pos.col && grid.get(Position::new(pos.row, col)) == digit {
            return false;
        }
    }

    for row in 0..SIZE {
        if row != pos.row && grid.get(Position::new(row, pos.col)) == digit {
            return false;
        }
    }

    let top = (pos.row / BLOCK) * BLOCK;
    let left = (pos.col / BLOCK) * BLOCK;
    for row in top..top + BLOCK {
        for col in left..left + BLOCK {
            let other = Position::new(row, col);
            if other != pos && grid.get(other) == digit {
                return false;
            }
        }
    }

    true
}
