//! The polymorphic strategy interface.
//!
//! Every solving algorithm is a [`Search`] implementation operating on
//! a mutable [`Grid`]. The engine dispatches to one implementation per
//! strategy variant; callers that want a specific algorithm can also
//! construct it directly and skip the dispatch layer.

use crate::sudoku::grid::Grid;

/// A solving algorithm.
///
/// `search` mutates the grid in place. On success (`true`) the grid is
/// a complete solution; on failure (`false`) every trial placement has
/// been undone and the grid equals its pre-call state. Exhausting the
/// search space without a solution is a normal outcome, not an error.
pub trait Search {
    /// Human-readable strategy name, used in reports.
    fn name(&self) -> &'static str;

    /// Runs the search to completion on `grid`.
    fn search(&mut self, grid: &mut Grid) -> bool;
}
