//! Strategy selection and the one-call solve contract.
//!
//! The [`Engine`] is the entry point consumed by batch drivers: it
//! takes an 81-character puzzle string and a strategy id, parses the
//! puzzle, runs the chosen [`Search`] implementation, and returns a
//! [`SolveOutcome`]. Strategy selection is a tagged enumeration rather
//! than a bare integer code, dispatched once per call.
//!
//! The exact-cover variant is backed by an external collaborator; an
//! engine without a registered backend treats the `exact-cover` id as
//! unavailable.

use crate::sudoku::backtracking::{HeuristicBacktracking, NaiveBacktracking};
use crate::sudoku::error::SolveError;
use crate::sudoku::exact_cover::{ExactCoverAdapter, ExactCoverSolver};
use crate::sudoku::grid::Grid;
use crate::sudoku::random_walk::RandomWalk;
use crate::sudoku::search::Search;
use std::fmt;
use std::str::FromStr;

/// The result of one solve call.
///
/// Created at the end of a solve, consumed immediately by the caller;
/// the engine retains nothing. When `solved` is `false` the grid equals
/// the parsed input puzzle: backtracking strategies unwind every trial
/// placement before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Whether a complete solution was found.
    pub solved: bool,
    /// The final grid: a full solution, or the untouched puzzle.
    pub grid: Grid,
}

impl SolveOutcome {
    /// The final grid in the 81-character one-line encoding.
    #[must_use]
    pub fn result_line(&self) -> String {
        self.grid.to_line()
    }
}

/// Identifier of a solving strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Exhaustive backtracking, digits `1..=9` ascending.
    Naive,
    /// Backtracking with one-shot global-scarcity value ordering.
    Heuristic,
    /// Randomized, eventually-exhaustive backtracking.
    RandomWalk,
    /// Delegation to a registered external exact-cover backend.
    ExactCover,
}

impl StrategyKind {
    /// Every selectable strategy, in display order.
    pub const ALL: [Self; 4] = [
        Self::Naive,
        Self::Heuristic,
        Self::RandomWalk,
        Self::ExactCover,
    ];

    /// The stable string id used in the solve contract and on the
    /// command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Heuristic => "heuristic",
            Self::RandomWalk => "random-walk",
            Self::ExactCover => "exact-cover",
        }
    }

    /// Human-readable name, matching [`Search::name`] of the variant's
    /// implementation.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Naive => "naive backtracking",
            Self::Heuristic => "heuristic backtracking",
            Self::RandomWalk => "random walk",
            Self::ExactCover => "exact cover",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = SolveError;

    /// Parses a strategy id, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`SolveError::UnknownStrategy`] for anything that is not one of
    /// the ids listed by [`StrategyKind::id`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "heuristic" => Ok(Self::Heuristic),
            "random-walk" => Ok(Self::RandomWalk),
            "exact-cover" => Ok(Self::ExactCover),
            _ => Err(SolveError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Dispatches solve calls to the strategy implementations.
///
/// A fresh engine knows the three self-contained strategies; an
/// exact-cover backend can be registered with
/// [`Engine::with_exact_cover`].
#[derive(Default)]
pub struct Engine {
    exact_cover: Option<Box<dyn ExactCoverSolver>>,
}

impl Engine {
    /// Creates an engine with no exact-cover backend.
    #[must_use]
    pub fn new() -> Self {
        Self { exact_cover: None }
    }

    /// Registers `backend` as the exact-cover collaborator.
    #[must_use]
    pub fn with_exact_cover(mut self, backend: Box<dyn ExactCoverSolver>) -> Self {
        self.exact_cover = Some(backend);
        self
    }

    /// Solves `puzzle` with the strategy named by `strategy_id`.
    ///
    /// This is the string-keyed contract used by batch drivers; typed
    /// callers can use [`Engine::solve_with`] directly.
    ///
    /// # Errors
    ///
    /// [`SolveError::UnknownStrategy`] for an unrecognised id (no
    /// search is attempted), and the parse errors of
    /// [`Grid::from_line`] for malformed puzzles.
    pub fn solve(&self, puzzle: &str, strategy_id: &str) -> Result<SolveOutcome, SolveError> {
        let kind = StrategyKind::from_str(strategy_id)?;
        self.solve_with(puzzle, kind)
    }

    /// Solves `puzzle` with an already-selected strategy.
    ///
    /// # Errors
    ///
    /// The parse errors of [`Grid::from_line`], and
    /// [`SolveError::UnknownStrategy`] when `kind` is
    /// [`StrategyKind::ExactCover`] but no backend is registered.
    pub fn solve_with(
        &self,
        puzzle: &str,
        kind: StrategyKind,
    ) -> Result<SolveOutcome, SolveError> {
        let mut grid = Grid::from_line(puzzle)?;
        let solved = match kind {
            StrategyKind::Naive => NaiveBacktracking.search(&mut grid),
            StrategyKind::Heuristic => HeuristicBacktracking.search(&mut grid),
            StrategyKind::RandomWalk => RandomWalk::new().search(&mut grid),
            StrategyKind::ExactCover => {
                let backend = self
                    .exact_cover
                    .as_deref()
                    .ok_or_else(|| SolveError::UnknownStrategy(kind.id().to_string()))?;
                ExactCoverAdapter::new(backend).search(&mut grid)
            }
        };
        Ok(SolveOutcome { solved, grid })
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("exact_cover", &self.exact_cover.is_some())
            .finish()
    }
}
