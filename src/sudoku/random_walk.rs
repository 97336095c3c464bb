//! Randomized depth-first search.
//!
//! [`RandomWalk`] keeps the recursive backtracking shape but draws the
//! digit to try uniformly from `1..=9` with replacement, so a digit may
//! be re-tried several times within one frame. A frame only gives up
//! once all nine distinct digit values have appeared among its draws,
//! which makes the strategy eventually exhaustive per cell: it explores
//! the same space as [`NaiveBacktracking`] in a random order and with
//! redundant draws, so it terminates, just without a useful bound on
//! how long the redraws take.
//!
//! [`NaiveBacktracking`]: crate::sudoku::backtracking::NaiveBacktracking

use crate::sudoku::grid::Grid;
use crate::sudoku::search::Search;
use crate::sudoku::validate::is_legal;

/// Backtracking search with uniformly random digit ordering.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    rng: fastrand::Rng,
}

impl RandomWalk {
    /// Creates a walk seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a walk with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl Search for RandomWalk {
    fn name(&self) -> &'static str {
        "random walk"
    }

    fn search(&mut self, grid: &mut Grid) -> bool {
        walk(grid, &mut self.rng)
    }
}

fn walk(grid: &mut Grid, rng: &mut fastrand::Rng) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };

    let mut drawn = 0u16; // bit per distinct digit seen this frame
    loop {
        let digit = rng.u8(1..=9);
        drawn |= 1 << digit;
        // The draw that completes the set is still tried before the
        // frame reports failure.
        let exhausted = drawn.count_ones() == 9;

        if is_legal(grid, digit, pos) {
            grid.set(pos, digit);
            if walk(grid, rng) {
                return true;
            }
            grid.clear(pos);
        }

        if exhausted {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "070000043040009610800634900094052000358460020000800530080070091902100005007040802";
    const SOLUTION: &str =
        "679518243543729618821634957794352186358461729216897534485276391962183475137945862";

    #[test]
    fn test_solves_known_puzzle_with_fixed_seeds() {
        // Per-frame exhaustion makes the walk complete, so any seed must
        // reach the puzzle's unique solution.
        for seed in [0, 42, 0xDEAD_BEEF] {
            let mut grid = Grid::from_line(PUZZLE).unwrap();
            assert!(RandomWalk::with_seed(seed).search(&mut grid));
            assert_eq!(grid.to_line(), SOLUTION, "seed {seed}");
            assert!(grid.is_valid_solution());
        }
    }

    #[test]
    fn test_complete_grid_succeeds_immediately() {
        let mut grid = Grid::from_line(SOLUTION).unwrap();
        assert!(RandomWalk::with_seed(1).search(&mut grid));
        assert_eq!(grid.to_line(), SOLUTION);
    }

    #[test]
    fn test_restores_grid_on_failure() {
        // First row holds 1..=8 and the 9 below blocks cell (0, 8).
        let mut line = String::from("123456780000000009");
        line.push_str(&"0".repeat(81 - line.len()));
        let mut grid = Grid::from_line(&line).unwrap();
        let before = grid.clone();

        assert!(!RandomWalk::with_seed(7).search(&mut grid));
        assert_eq!(grid, before);
    }
}
