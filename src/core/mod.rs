//! Core parsing for tsum.
//!
//! This module provides the time-string parser shared by the session layer.

mod parser;

pub use parser::{parse_time, ParsedTime, TimeFormat};
