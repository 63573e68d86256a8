//! Command-line surface for tsum.
//!
//! The binary takes no options beyond help and version; everything
//! interactive happens in the repl.

pub mod args;
pub mod repl;
