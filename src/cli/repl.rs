//! The interactive read-sum-print loop.
//!
//! Reads lines from stdin, dispatches commands, and feeds everything else
//! to the tally while a session is active.

use std::io::{self, Write};

use colored::Colorize;

use crate::error::TsumError;
use crate::session::TimeTally;

/// A line-level command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a summing session.
    Start,
    /// End the session and show the total.
    End,
    /// Zero the total and return to idle.
    Reset,
    /// Undo the last minutes:seconds addition.
    Undo,
    /// Show the command help.
    Help,
    /// Exit the program.
    Quit,
}

impl Command {
    /// Parse a command from a trimmed input line.
    ///
    /// Matching is case-insensitive and exact; anything that is not a
    /// command is left for the dispatcher to treat as time input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "reset" => Some(Self::Reset),
            "undo" => Some(Self::Undo),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Action to take after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print a reply and keep reading.
    Reply(String),
    /// Keep reading without printing.
    Quiet,
    /// Say goodbye and stop.
    Quit,
}

/// The interactive loop and the tally it drives.
#[derive(Debug, Default)]
pub struct Repl {
    tally: TimeTally,
}

impl Repl {
    /// Create a repl with an empty, idle tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tally: TimeTally::new(),
        }
    }

    /// Get the tally behind the loop.
    #[must_use]
    pub const fn tally(&self) -> &TimeTally {
        &self.tally
    }

    /// Run the loop until quit or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`TsumError::Io`] when reading a line or flushing the
    /// prompt fails.
    pub fn run(&mut self) -> Result<(), TsumError> {
        println!("{}", "tsum - sum times from the terminal".bold());
        println!("{}", instructions());
        println!();

        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;

            line.clear();
            if io::stdin().read_line(&mut line)? == 0 {
                // End of input: leave quietly, no farewell.
                return Ok(());
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match self.dispatch(input) {
                Action::Reply(text) => println!("{text}"),
                Action::Quiet => {}
                Action::Quit => {
                    println!("Goodbye!");
                    return Ok(());
                }
            }
        }
    }

    /// Handle one trimmed, non-empty input line.
    pub fn dispatch(&mut self, input: &str) -> Action {
        match Command::parse(input) {
            Some(Command::Start) => {
                self.tally.start();
                Action::Reply(
                    "Started summing times. Enter times in HH:MM:SS, HH:MM, or MM:SS format \
                     or 'end' to finish."
                        .to_string(),
                )
            }
            Some(Command::End) => {
                if !self.tally.is_summing() {
                    return Action::Reply(
                        "Not currently summing. Use 'start' to begin.".to_string(),
                    );
                }
                self.tally.finish();
                Action::Reply(self.total_report())
            }
            Some(Command::Reset) => {
                self.tally.reset();
                Action::Reply("Time sum reset".to_string())
            }
            Some(Command::Undo) => {
                self.tally.undo();
                Action::Quiet
            }
            Some(Command::Help) => Action::Reply(instructions()),
            Some(Command::Quit) => Action::Quit,
            None if self.tally.is_summing() => self.add_time(input),
            None => Action::Reply(
                "Not currently summing. Use 'start' to begin or 'help' for commands.".to_string(),
            ),
        }
    }

    /// Try to add a time value to the active session.
    fn add_time(&mut self, input: &str) -> Action {
        match self.tally.add_time(input) {
            Ok(_) => Action::Reply(format!(
                "Added {input} (total: {})",
                self.tally.format_total().bold()
            )),
            Err(e) => Action::Reply(format!(
                "{}: {e}\n{}",
                "Error".red(),
                "Enter a valid time in HH:MM:SS, HH:MM, or MM:SS format or 'end' to finish."
                    .dimmed()
            )),
        }
    }

    /// Report the session total.
    fn total_report(&self) -> String {
        if self.tally.total_seconds() == 0 {
            return "No times added yet".to_string();
        }
        format!("Total time: {}", self.tally.format_total().bold())
    }
}

/// Build the command help block.
fn instructions() -> String {
    let mut lines = Vec::new();

    lines.push("Commands:".bold().to_string());
    for (name, desc) in [
        ("start", "Start summing times"),
        ("end  ", "End summing and show total"),
        ("reset", "Reset the sum"),
        ("undo ", "Undo the last time added"),
        ("quit ", "Exit the program"),
        ("help ", "Show this help"),
    ] {
        lines.push(format!("  {} - {desc}", name.cyan().bold()));
    }

    lines.push("Time formats:".bold().to_string());
    lines.push("  HH:MM:SS (e.g., 02:30:45)".to_string());
    lines.push("  HH:MM    (e.g., 02:30)".to_string());
    lines.push("  MM:SS    (e.g., 30:45)".to_string());

    lines.join("\n")
}
