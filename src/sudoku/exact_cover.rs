//! Boundary to an external exact-cover solver.
//!
//! The engine does not implement Algorithm X / Dancing Links itself.
//! It only defines the capability contract an external implementation
//! satisfies — [`ExactCoverSolver`] — and the adapter that plugs such a
//! backend in behind the same [`Search`] interface as the built-in
//! strategies. Any self-contained or third-party exact-cover solver can
//! be substituted without touching the other strategies.

use crate::sudoku::grid::Grid;
use crate::sudoku::search::Search;

/// Contract satisfied by an external exact-cover implementation.
///
/// `solve` takes the puzzle grid and returns a solved grid, or `None`
/// when the puzzle has no solution. The backend never mutates the
/// caller's grid.
pub trait ExactCoverSolver {
    /// Attempts to solve `grid`, returning a completed copy on success.
    fn solve(&self, grid: &Grid) -> Option<Grid>;
}

/// Adapts an [`ExactCoverSolver`] backend to the [`Search`] interface.
///
/// The adapter accepts the backend's answer only if the returned grid
/// has zero empty cells, in which case it replaces the caller's grid;
/// anything else counts as "no solution" and leaves the grid untouched.
#[derive(Clone, Copy)]
pub struct ExactCoverAdapter<'a> {
    backend: &'a dyn ExactCoverSolver,
}

impl<'a> ExactCoverAdapter<'a> {
    /// Wraps `backend` for use as a search strategy.
    #[must_use]
    pub const fn new(backend: &'a dyn ExactCoverSolver) -> Self {
        Self { backend }
    }
}

impl Search for ExactCoverAdapter<'_> {
    fn name(&self) -> &'static str {
        "exact cover"
    }

    fn search(&mut self, grid: &mut Grid) -> bool {
        match self.backend.solve(grid) {
            Some(solution) if solution.is_complete() => {
                *grid = solution;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::Position;

    const PUZZLE: &str =
        "070000043040009610800634900094052000358460020000800530080070091902100005007040802";
    const SOLUTION: &str =
        "679518243543729618821634957794352186358461729216897534485276391962183475137945862";

    /// Backend that replays a canned answer.
    struct Canned(Option<Grid>);

    impl ExactCoverSolver for Canned {
        fn solve(&self, _grid: &Grid) -> Option<Grid> {
            self.0.clone()
        }
    }

    #[test]
    fn test_adapter_accepts_complete_answer() {
        let backend = Canned(Some(Grid::from_line(SOLUTION).unwrap()));
        let mut grid = Grid::from_line(PUZZLE).unwrap();
        assert!(ExactCoverAdapter::new(&backend).search(&mut grid));
        assert_eq!(grid.to_line(), SOLUTION);
    }

    #[test]
    fn test_adapter_rejects_none() {
        let backend = Canned(None);
        let mut grid = Grid::from_line(PUZZLE).unwrap();
        assert!(!ExactCoverAdapter::new(&backend).search(&mut grid));
        assert_eq!(grid.to_line(), PUZZLE);
    }

    #[test]
    fn test_adapter_rejects_incomplete_answer() {
        // A backend that echoes a grid with empty cells has not solved
        // anything, whatever it claims.
        let mut partial = Grid::from_line(SOLUTION).unwrap();
        partial.clear(Position::new(4, 4));
        let backend = Canned(Some(partial));

        let mut grid = Grid::from_line(PUZZLE).unwrap();
        assert!(!ExactCoverAdapter::new(&backend).search(&mut grid));
        assert_eq!(grid.to_line(), PUZZLE);
    }
}
