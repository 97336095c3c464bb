//! Per-cell candidate computation and the scarcity ordering heuristic.
//!
//! [`scan_all`] computes, for every empty cell, the digits that are
//! locally legal *at the time of the scan*, then orders each cell's
//! candidates by global scarcity: digits that appear as a candidate in
//! few places anywhere on the board are tried first, which tends to
//! expose dead branches early. This is a value-ordering heuristic; cell
//! ordering stays row-major regardless.
//!
//! The scan is one-shot. It reflects the grid as it was before the
//! search placed anything and is never recomputed as the grid mutates;
//! the validator re-checks every placement, so stale candidates cost
//! time, never correctness.

use crate::sudoku::grid::{EMPTY, Grid, Position};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Ordered candidate digits for one cell. Never longer than nine, so it
/// always lives inline.
pub type CandidateList = SmallVec<[u8; 9]>;

/// Mapping from each empty cell to its ordered candidate digits.
pub type CandidateMap = FxHashMap<Position, CandidateList>;

/// The digits `1..=9` not present in the row, column or block of `pos`,
/// in ascending order, based on the grid's state at call time.
#[must_use]
pub fn candidates_for(grid: &Grid, pos: Position) -> CandidateList {
    let mut used = 0u16; // bit d set <=> digit d occupies the cell's houses
    for value in grid
        .row_values(pos.row)
        .chain(grid.col_values(pos.col))
        .chain(grid.block_values(pos.block()))
    {
        used |= 1 << value;
    }

    (1..=9u8).filter(|&d| used & (1 << d) == 0).collect()
}

/// Computes [`candidates_for`] every empty cell, then sorts each cell's
/// candidates ascending by `(global_count, digit)`.
///
/// `global_count` of a digit is the number of cells on the whole board
/// whose candidate set contains it; ties are broken by numeric digit
/// value, which makes the ordering fully deterministic.
#[must_use]
pub fn scan_all(grid: &Grid) -> CandidateMap {
    let mut map: CandidateMap = grid
        .free_cells()
        .into_iter()
        .map(|pos| (pos, candidates_for(grid, pos)))
        .collect();

    let counts = global_counts(&map);
    for list in map.values_mut() {
        list.sort_unstable_by_key(|&d| (counts[usize::from(d)], d));
    }
    map
}

/// How many times each digit appears as a candidate anywhere on the
/// board. Index 0 is unused.
fn global_counts(map: &CandidateMap) -> [u32; 10] {
    let mut counts = [0u32; 10];
    for list in map.values() {
        for &digit in list {
            counts[usize::from(digit)] += 1;
        }
    }
    counts
}
