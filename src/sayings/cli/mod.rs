//! # CLI Behavior
//!
//! This is **one possible client** of the sayings interpreter. It is the only
//! place that knows about terminal I/O, exit codes and output formatting.
//!
//! `sayings [FILE]` runs every line of FILE (or the configured input file,
//! `artifact.txt` by default) and prints, in input order:
//! - one line per record for each PRINT
//! - one diagnostic per rejected line
//!
//! A missing or unreadable file prints a single diagnostic and exits with
//! status 1 before any command runs.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and the execute handler
//! - `logging`: tracing subscriber installation (stderr only)
//! - `print`: Record and message output
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
