use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tsum")]
#[command(about = "An interactive time-summing calculator for the terminal")]
#[command(long_about = "tsum - An interactive time-summing calculator

Reads times from standard input and keeps a running total. Start a
session, type one time per line, and read the total back in a
normalized form.

QUICK START:
  tsum              Enter the interactive loop
  > start           Begin summing
  > 02:30:45        Add 2 hours 30 minutes 45 seconds
  > 30:45           Add 30 minutes 45 seconds
  > end             Show the total and stop summing
  > quit            Leave

TIME FORMATS:
  HH:MM:SS   hours, minutes, and seconds (e.g., 02:30:45)
  MM:SS      minutes and seconds (e.g., 30:45)

A two-field time reads as minutes:seconds whenever its leading value
is below 60, so 02:30 is 2 minutes 30 seconds. Enter hours with an
explicit seconds field, e.g. 02:30:00.")]
#[command(version)]
pub struct Cli {}
