//! Summing session state for tsum.
//!
//! This module owns the running total and its undo history.

mod tally;

pub use tally::{format_total, TallyState, TimeTally};
