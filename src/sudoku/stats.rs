//! The run-statistics record handed to the external persistence
//! collaborator.
//!
//! One [`RunReport`] is produced per batch run. The engine does not
//! store reports anywhere; it fills in the record (including the
//! wall-clock date and start time of the run) and the consumer decides
//! what to do with it. The record is `Serialize` so the collaborator
//! can take it as JSON. The derived solutions ratio is deliberately
//! left to the consumer.

use serde::Serialize;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Statistics for one batch run, one record per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// How results were presented to the user, e.g. `"to screen"`.
    pub presentation_method: String,
    /// Human-readable name of the strategy used for the whole batch.
    pub solve_method_name: String,
    /// ISO date (`YYYY-MM-DD`, UTC) the run started.
    pub test_date: String,
    /// Wall-clock start time (`HH:MM:SS`, UTC).
    pub start_time: String,
    /// Total run duration in seconds.
    pub duration_seconds: f64,
    /// Number of puzzles attempted.
    pub puzzles_read: usize,
    /// Number of puzzles solved; at most `puzzles_read`.
    pub solutions_found: usize,
    /// `duration_seconds / puzzles_read`, or `0.0` for an empty batch.
    pub avg_solve_time_seconds: f64,
}

impl RunReport {
    /// Builds the record for a finished batch run.
    #[must_use]
    pub fn new(
        presentation_method: impl Into<String>,
        solve_method_name: impl Into<String>,
        started_at: SystemTime,
        duration: Duration,
        puzzles_read: usize,
        solutions_found: usize,
    ) -> Self {
        debug_assert!(solutions_found <= puzzles_read);

        let (test_date, start_time) = date_and_time(started_at);
        let duration_seconds = duration.as_secs_f64();
        let avg_solve_time_seconds = if puzzles_read == 0 {
            0.0
        } else {
            duration_seconds / puzzles_read as f64
        };

        Self {
            presentation_method: presentation_method.into(),
            solve_method_name: solve_method_name.into(),
            test_date,
            start_time,
            duration_seconds,
            puzzles_read,
            solutions_found,
            avg_solve_time_seconds,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<22}: {}", "Presentation method", self.presentation_method)?;
        writeln!(f, "{:<22}: {}", "Solve method name", self.solve_method_name)?;
        writeln!(f, "{:<22}: {}", "Test date", self.test_date)?;
        writeln!(f, "{:<22}: {}", "Test start time", self.start_time)?;
        writeln!(f, "{:<22}: {:.8}", "Test duration (s)", self.duration_seconds)?;
        writeln!(f, "{:<22}: {}", "Puzzles read", self.puzzles_read)?;
        writeln!(f, "{:<22}: {}", "Solutions found", self.solutions_found)?;
        writeln!(
            f,
            "{:<22}: {:.8}",
            "Avg. solve time (s)", self.avg_solve_time_seconds
        )
    }
}

/// Formats `at` as UTC (`YYYY-MM-DD`, `HH:MM:SS`) strings.
///
/// Times before the Unix epoch clamp to the epoch; no pack of puzzle
/// runs predates 1970.
fn date_and_time(at: SystemTime) -> (String, String) {
    let secs = at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let second_of_day = secs % 86_400;
    let (hour, minute, second) = (
        second_of_day / 3_600,
        second_of_day % 3_600 / 60,
        second_of_day % 60,
    );

    let (year, month, day) = civil_from_days(secs / 86_400);

    (
        format!("{year:04}-{month:02}-{day:02}"),
        format!("{hour:02}:{minute:02}:{second:02}"),
    )
}

/// Gregorian date from days since 1970-01-01 (Howard Hinnant's
/// `civil_from_days`, restricted to non-negative input).
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let mut year = yoe + era * 400;
    if month <= 2 {
        year += 1;
    }
    (year, month, day)
}
