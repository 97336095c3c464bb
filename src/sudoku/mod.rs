#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! The constraint-solving engine: grid model, candidate analysis and
//! the family of search strategies.

/// Exhaustive backtracking strategies (naive and heuristic-ordered).
pub mod backtracking;

/// Per-cell candidate computation and the scarcity ordering heuristic.
pub mod candidates;

/// Strategy dispatch and the one-call solve contract.
pub mod engine;

/// Error types for parsing and strategy selection.
pub mod error;

/// Adapter boundary to an external exact-cover solver.
pub mod exact_cover;

/// The 9×9 grid model.
pub mod grid;

/// Randomized, eventually-exhaustive search.
pub mod random_walk;

/// The polymorphic strategy interface.
pub mod search;

/// The run-statistics record for batch runs.
pub mod stats;

/// Single-cell placement legality.
pub mod validate;

pub use engine::{Engine, SolveOutcome, StrategyKind};
pub use error::SolveError;
pub use grid::{Grid, Position};
pub use search::Search;
