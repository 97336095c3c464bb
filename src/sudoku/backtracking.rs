//! Exhaustive backtracking strategies.
//!
//! Both strategies share the classic recursive shape: pick the next
//! empty cell in row-major order, try digits the validator accepts,
//! recurse, and undo the placement when the branch dies. They differ
//! only in the order digits are tried per cell:
//!
//! * [`NaiveBacktracking`] tries `1..=9` ascending.
//! * [`HeuristicBacktracking`] tries the scarcity-ordered candidates
//!   from a one-shot [`scan_all`] of the original grid.
//!
//! Cell selection and value ordering are independent axes here; neither
//! strategy re-picks the most-constrained cell dynamically.
//!
//! Recursion depth is bounded by the number of empty cells (≤ 81), one
//! frame per cell, so stack usage is small and predictable.

use crate::sudoku::candidates::{CandidateMap, scan_all};
use crate::sudoku::grid::{Grid, Position};
use crate::sudoku::search::Search;
use crate::sudoku::validate::is_legal;

/// Depth-first search trying digits `1..=9` ascending at every cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBacktracking;

impl Search for NaiveBacktracking {
    fn name(&self) -> &'static str {
        "naive backtracking"
    }

    /// Collects the empty cells once, then fills them in strict list
    /// order. Depth reaching the list length signals success.
    fn search(&mut self, grid: &mut Grid) -> bool {
        let free = grid.free_cells();
        fill_from(grid, &free, 0)
    }
}

fn fill_from(grid: &mut Grid, free: &[Position], depth: usize) -> bool {
    let Some(&pos) = free.get(depth) else {
        // No cell left unassigned: the per-step validator checks
        // guarantee the filled grid is consistent.
        return true;
    };

    for digit in 1..=9u8 {
        if is_legal(grid, digit, pos) {
            grid.set(pos, digit);
            if fill_from(grid, free, depth + 1) {
                return true;
            }
            grid.clear(pos);
        }
    }

    false
}

/// Depth-first search trying digits in global-scarcity order.
///
/// The candidate ordering is computed once from the grid as given and
/// deliberately not refreshed as the search fills cells in; the
/// validator re-checks every placement, so the stale ordering affects
/// performance only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicBacktracking;

impl Search for HeuristicBacktracking {
    fn name(&self) -> &'static str {
        "heuristic backtracking"
    }

    fn search(&mut self, grid: &mut Grid) -> bool {
        let ordered = scan_all(grid);
        fill_ordered(grid, &ordered)
    }
}

fn fill_ordered(grid: &mut Grid, ordered: &CandidateMap) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };

    // Any cell empty mid-search was already empty at scan time, so the
    // lookup only misses for cells that had no candidates to begin with.
    let Some(candidates) = ordered.get(&pos) else {
        return false;
    };

    for &digit in candidates {
        if is_legal(grid, digit, pos) {
            grid.set(pos, digit);
            if fill_ordered(grid, ordered) {
                return true;
            }
            grid.clear(pos);
        }
    }

    false
}
