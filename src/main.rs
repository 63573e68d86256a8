use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tsum::cli::args::Cli;
use tsum::cli::repl::Repl;
use tsum::error::TsumError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TsumError> {
    Cli::parse();

    let mut repl = Repl::new();
    repl.run()
}
