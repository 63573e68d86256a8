//! tsum - An interactive time-summing calculator for the terminal
//!
//! This crate provides a small read-sum-print loop that adds up times
//! entered as HH:MM:SS, HH:MM, or MM:SS and reports the running total.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod session;

pub use cli::args::Cli;
pub use cli::repl::{Action, Command, Repl};
pub use error::{TimeUnit, TsumError};
pub use session::{format_total, TallyState, TimeTally};
