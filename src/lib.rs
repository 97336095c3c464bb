#![warn(missing_docs)]
//! A Sudoku solver with interchangeable search strategies.
//!
//! The crate solves classic 9×9 row/column/block uniqueness puzzles.
//! Three self-contained strategies are built in — naive backtracking,
//! backtracking with a global-scarcity value-ordering heuristic, and a
//! randomized walk — and a fourth variant delegates to an external
//! exact-cover (Algorithm X / Dancing Links) backend behind the same
//! interface.
//!
//! # Example
//!
//! ```
//! use sudoku_solver::sudoku::Engine;
//!
//! let puzzle =
//!     "070000043040009610800634900094052000358460020000800530080070091902100005007040802";
//!
//! let outcome = Engine::new().solve(puzzle, "heuristic")?;
//! assert!(outcome.solved);
//! assert!(outcome.grid.is_valid_solution());
//! # Ok::<(), sudoku_solver::sudoku::SolveError>(())
//! ```
//!
//! Puzzles use the one-line encoding: 81 characters `'0'..='9'`,
//! row-major, `'0'` meaning empty. A solve either returns a complete
//! valid grid (`solved == true`) or the untouched input puzzle
//! (`solved == false`); an unsolvable puzzle is a normal outcome, not
//! an error.

/// The `sudoku` module implements the solving engine: the grid model,
/// candidate analysis, and the search strategies.
pub mod sudoku;
