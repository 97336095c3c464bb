//! Error types for puzzle parsing and strategy selection.
//!
//! A failed search is *not* an error: strategies report it through
//! [`SolveOutcome::solved`](crate::sudoku::engine::SolveOutcome) being
//! `false`. Only structurally malformed input and unrecognised strategy
//! ids surface as `SolveError`.

use thiserror::Error;

/// Errors surfaced by [`Engine::solve`](crate::sudoku::engine::Engine::solve)
/// and [`Grid::from_line`](crate::sudoku::grid::Grid::from_line).
///
/// All variants are terminal for the single call that produced them and
/// non-retryable without correcting the input. They never leave a partial
/// grid behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The puzzle string is not exactly 81 characters long.
    #[error("malformed puzzle: expected 81 characters, found {0}")]
    PuzzleLength(usize),

    /// The puzzle string contains a character outside `'0'..='9'`.
    #[error("malformed puzzle: invalid character `{found}` at cell {index}")]
    PuzzleCharacter {
        /// Row-major cell index of the offending character.
        index: usize,
        /// The character that is not a digit.
        found: char,
    },

    /// The requested strategy id is not recognised, or names a strategy
    /// that is unavailable (exact cover with no registered backend).
    #[error("unknown or unavailable strategy `{0}`")]
    UnknownStrategy(String),
}
