//! Time accumulation for a summing session.
//!
//! Tracks the running total, the undo history, and whether a session is
//! active.

use chrono::Duration;

use crate::core::{parse_time, ParsedTime, TimeFormat};
use crate::error::TsumError;

/// State of a summing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TallyState {
    /// No session is active; time input is rejected.
    #[default]
    Idle,
    /// A session is active; time input is added to the total.
    Summing,
}

impl TallyState {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Summing => "Summing",
        }
    }
}

impl std::fmt::Display for TallyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A running sum of times.
///
/// The total never goes negative: undo subtracts with a clamp at zero, and
/// every operation that zeroes the total also clears the undo history.
#[derive(Debug, Clone, Default)]
pub struct TimeTally {
    /// Seconds accumulated so far.
    total_seconds: i64,
    /// Magnitudes of past minutes:seconds additions, newest last.
    history: Vec<i64>,
    /// Current state.
    state: TallyState,
}

impl TimeTally {
    /// Create an empty, idle tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_seconds: 0,
            history: Vec::new(),
            state: TallyState::Idle,
        }
    }

    /// Begin a summing session, discarding any previous total and history.
    pub fn start(&mut self) {
        self.total_seconds = 0;
        self.history.clear();
        self.state = TallyState::Summing;
    }

    /// End the session, keeping the total for the final report.
    pub fn finish(&mut self) {
        self.state = TallyState::Idle;
    }

    /// Zero the total and history and return to idle.
    pub fn reset(&mut self) {
        self.total_seconds = 0;
        self.history.clear();
        self.state = TallyState::Idle;
    }

    /// Parse a time string and add it to the total.
    ///
    /// Only minutes:seconds additions are recorded for undo; the other
    /// shapes change the total without touching the history.
    ///
    /// # Errors
    ///
    /// Returns the parser's error unchanged; the tally is not modified on
    /// failure.
    pub fn add_time(&mut self, input: &str) -> Result<ParsedTime, TsumError> {
        let parsed = parse_time(input)?;

        self.total_seconds += parsed.seconds;
        if parsed.format == TimeFormat::MinutesSeconds {
            self.history.push(parsed.seconds);
        }

        Ok(parsed)
    }

    /// Remove the most recent minutes:seconds addition.
    ///
    /// Returns the amount removed, or `None` when there is nothing to
    /// undo. The total is clamped at zero.
    pub fn undo(&mut self) -> Option<Duration> {
        let last = self.history.pop()?;
        self.total_seconds = (self.total_seconds - last).max(0);
        Some(Duration::seconds(last))
    }

    /// Get the total as a Duration.
    #[must_use]
    pub const fn total(&self) -> Duration {
        Duration::seconds(self.total_seconds)
    }

    /// Get the total in whole seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TallyState {
        self.state
    }

    /// Check if a session is active.
    #[must_use]
    pub fn is_summing(&self) -> bool {
        self.state == TallyState::Summing
    }

    /// Number of additions currently available to undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Format the total with the smallest shape that fits.
    #[must_use]
    pub fn format_total(&self) -> String {
        format_total(self.total())
    }
}

/// Format a duration with the smallest shape that fits.
///
/// An hour or more renders as HH:MM:SS, under an hour as MM:SS, and under
/// a minute as 00:SS, all fields zero-padded.
#[must_use]
pub fn format_total(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else if minutes > 0 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("00:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TimeUnit, TsumError};

    fn summing_tally() -> TimeTally {
        let mut tally = TimeTally::new();
        tally.start();
        tally
    }

    // ==============
    // Addition Tests
    // ==============

    #[test]
    fn test_add_full_time() {
        let mut tally = summing_tally();
        tally.add_time("02:30:45").unwrap();

        assert_eq!(tally.total_seconds(), 9045);
        assert_eq!(tally.format_total(), "02:30:45");
        assert_eq!(tally.history_len(), 0);
    }

    #[test]
    fn test_add_minutes_seconds() {
        let mut tally = summing_tally();
        tally.add_time("30:45").unwrap();

        assert_eq!(tally.total_seconds(), 1845);
        assert_eq!(tally.format_total(), "30:45");
        assert_eq!(tally.history_len(), 1);
    }

    #[test]
    fn test_add_small_two_field_reads_as_minutes() {
        let mut tally = summing_tally();
        tally.add_time("02:30").unwrap();

        assert_eq!(tally.total_seconds(), 150);
        assert_eq!(tally.format_total(), "02:30");
    }

    #[test]
    fn test_add_accumulates() {
        let mut tally = summing_tally();
        tally.add_time("01:00:00").unwrap();
        tally.add_time("30:00").unwrap();

        assert_eq!(tally.total_seconds(), 5400);
        assert_eq!(tally.format_total(), "01:30:00");
    }

    #[test]
    fn test_add_range_error_leaves_tally_unchanged() {
        let mut tally = summing_tally();
        let err = tally.add_time("75:00").unwrap_err();

        assert!(matches!(
            err,
            TsumError::OutOfRange {
                unit: TimeUnit::Hours
            }
        ));
        assert_eq!(tally.total_seconds(), 0);
        assert_eq!(tally.history_len(), 0);
        assert!(tally.is_summing());
    }

    #[test]
    fn test_add_format_error_leaves_tally_unchanged() {
        let mut tally = summing_tally();
        tally.add_time("01:00:00").unwrap();
        let err = tally.add_time("5:5").unwrap_err();

        assert!(matches!(err, TsumError::InvalidFormat));
        assert_eq!(tally.total_seconds(), 3600);
    }

    // ==========
    // Undo Tests
    // ==========

    #[test]
    fn test_undo_removes_last_addition() {
        let mut tally = summing_tally();
        tally.add_time("30:45").unwrap();

        assert_eq!(tally.undo(), Some(Duration::seconds(1845)));
        assert_eq!(tally.total_seconds(), 0);
    }

    #[test]
    fn test_undo_skips_full_time_additions() {
        let mut tally = summing_tally();
        tally.add_time("02:30:45").unwrap();
        tally.add_time("30:45").unwrap();

        assert_eq!(tally.undo(), Some(Duration::seconds(1845)));
        assert_eq!(tally.total_seconds(), 9045);

        // The HH:MM:SS addition is not undoable.
        assert_eq!(tally.undo(), None);
        assert_eq!(tally.total_seconds(), 9045);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut tally = summing_tally();
        assert_eq!(tally.undo(), None);
        assert_eq!(tally.total_seconds(), 0);
    }

    #[test]
    fn test_undo_after_reset_is_noop() {
        let mut tally = summing_tally();
        tally.add_time("30:45").unwrap();
        tally.reset();

        assert_eq!(tally.undo(), None);
        assert_eq!(tally.total_seconds(), 0);
    }

    #[test]
    fn test_undo_in_order() {
        let mut tally = summing_tally();
        tally.add_time("10:00").unwrap();
        tally.add_time("20:00").unwrap();

        assert_eq!(tally.undo(), Some(Duration::minutes(20)));
        assert_eq!(tally.undo(), Some(Duration::minutes(10)));
        assert_eq!(tally.undo(), None);
    }

    #[test]
    fn test_undo_clamps_total_at_zero() {
        // The clamp holds even when a history entry exceeds the total, a
        // state no public sequence produces under the current retention
        // policy.
        let mut tally = TimeTally {
            total_seconds: 3,
            history: vec![10],
            state: TallyState::Summing,
        };

        assert_eq!(tally.undo(), Some(Duration::seconds(10)));
        assert_eq!(tally.total_seconds(), 0);
        assert_eq!(tally.history_len(), 0);
    }

    // =========================
    // Session Transition Tests
    // =========================

    #[test]
    fn test_new_is_idle() {
        let tally = TimeTally::new();
        assert_eq!(tally.state(), TallyState::Idle);
        assert_eq!(tally.total_seconds(), 0);
        assert!(!tally.is_summing());
    }

    #[test]
    fn test_start_begins_summing() {
        let mut tally = TimeTally::new();
        tally.start();
        assert!(tally.is_summing());
        assert_eq!(tally.state(), TallyState::Summing);
    }

    #[test]
    fn test_start_zeroes_previous_total() {
        let mut tally = summing_tally();
        tally.add_time("30:45").unwrap();
        tally.finish();

        tally.start();
        assert_eq!(tally.total_seconds(), 0);
        assert_eq!(tally.undo(), None);
    }

    #[test]
    fn test_finish_keeps_total() {
        let mut tally = summing_tally();
        tally.add_time("30:45").unwrap();
        tally.finish();

        assert!(!tally.is_summing());
        assert_eq!(tally.total_seconds(), 1845);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tally = summing_tally();
        tally.add_time("30:45").unwrap();
        tally.reset();

        assert_eq!(tally.state(), TallyState::Idle);
        assert_eq!(tally.total_seconds(), 0);
        assert_eq!(tally.history_len(), 0);
    }

    #[test]
    fn test_tally_state_display() {
        assert_eq!(TallyState::Idle.to_string(), "Idle");
        assert_eq!(TallyState::Summing.to_string(), "Summing");
    }

    // ================
    // Formatting Tests
    // ================

    #[test]
    fn test_format_total_zero() {
        assert_eq!(format_total(Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_total_under_a_minute() {
        assert_eq!(format_total(Duration::seconds(59)), "00:59");
    }

    #[test]
    fn test_format_total_minute_boundary() {
        assert_eq!(format_total(Duration::seconds(60)), "01:00");
    }

    #[test]
    fn test_format_total_under_an_hour() {
        assert_eq!(format_total(Duration::seconds(3599)), "59:59");
    }

    #[test]
    fn test_format_total_hour_boundary() {
        assert_eq!(format_total(Duration::seconds(3600)), "01:00:00");
    }

    #[test]
    fn test_format_total_pads_fields() {
        assert_eq!(format_total(Duration::seconds(3661)), "01:01:01");
    }

    #[test]
    fn test_format_total_full_time() {
        assert_eq!(format_total(Duration::seconds(9045)), "02:30:45");
    }

    #[test]
    fn test_format_total_past_a_day() {
        // The total is a sum, not a clock time; hours keep counting.
        assert_eq!(format_total(Duration::hours(25)), "25:00:00");
    }

    #[test]
    fn test_format_total_negative_clamped() {
        assert_eq!(format_total(Duration::seconds(-5)), "00:00");
    }

    // =========================
    // Round-Trip Property Tests
    // =========================

    #[test]
    fn test_full_time_round_trip() {
        // A single HH:MM:SS addition with nonzero hours formats back to
        // the zero-padded input.
        for hours in [1, 2, 9, 10, 23] {
            for minutes in [0, 1, 30, 59] {
                for seconds in [0, 1, 30, 59] {
                    let input = format!("{hours:02}:{minutes:02}:{seconds:02}");
                    let mut tally = summing_tally();
                    tally.add_time(&input).unwrap();
                    assert_eq!(tally.format_total(), input);
                }
            }
        }
    }

    #[test]
    fn test_minutes_seconds_round_trip() {
        // A single MM:SS addition with nonzero minutes formats back to
        // the zero-padded input.
        for minutes in [1, 2, 30, 59] {
            for seconds in [0, 1, 30, 59] {
                let input = format!("{minutes:02}:{seconds:02}");
                let mut tally = summing_tally();
                tally.add_time(&input).unwrap();
                assert_eq!(tally.format_total(), input);
            }
        }
    }
}
