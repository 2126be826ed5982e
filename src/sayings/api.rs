//! # Interpreter Facade
//!
//! [`SayingsApi`] is the single entry point for running commands. It:
//! - **Classifies** each line via [`command::parse_line`]
//! - **Dispatches** to the matching `commands::*::run`
//! - **Contains** per-line failures: a bad line becomes a diagnostic in its
//!   [`CmdResult`] and has no effect on the store
//!
//! Only a source that cannot be read escapes as an `Err`, and it does so
//! before any line runs.
//!
//! Like the rest of the library, the facade never writes to stdout or stderr.
//! Results are handed to the caller, in input order, through an `emit` callback.

use crate::command::{self, Command};
use crate::commands::{self, CmdResult};
use crate::error::{Result, SayingsError};
use crate::store::RecordStore;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Generic over `RecordStore` so tests and embedders can supply their own store.
pub struct SayingsApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> SayingsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Runs an already parsed command against the store.
    pub fn execute(&mut self, command: &Command) -> Result<CmdResult> {
        match command {
            Command::Add { type_tag, fields } => {
                commands::add::run(&mut self.store, type_tag, fields)
            }
            Command::Remove(predicate) => commands::remove::run(&mut self.store, predicate),
            Command::Print => commands::print::run(&self.store),
        }
    }

    /// Parses and runs one line. Never fails: recoverable errors are reported
    /// as diagnostics in the returned result.
    pub fn process_line(&mut self, line: &str) -> CmdResult {
        let outcome = command::parse_line(line).and_then(|parsed| match parsed {
            Some(cmd) => {
                debug!(command = cmd.keyword(), "executing");
                self.execute(&cmd)
            }
            None => Ok(CmdResult::default()),
        });

        match outcome {
            Ok(result) => result,
            Err(e) => {
                warn!(line = line.trim(), error = %e, "line rejected");
                let mut result = CmdResult::default();
                result.add_diagnostic(e.to_string());
                result
            }
        }
    }

    /// Runs every line of `source` in order. Results with something to show
    /// (listed records or diagnostics) are handed to `emit` as they are produced.
    pub fn execute_source<F>(&mut self, source: &str, mut emit: F)
    where
        F: FnMut(CmdResult),
    {
        for (number, line) in source.lines().enumerate() {
            debug!(line = number + 1, "processing");
            let result = self.process_line(line);
            if result.is_reportable() {
                emit(result);
            }
        }
    }

    /// Reads the whole file, then runs it line by line.
    ///
    /// A missing or unreadable file aborts before any command executes.
    pub fn execute_file<P, F>(&mut self, path: P, emit: F) -> Result<()>
    where
        P: AsRef<Path>,
        F: FnMut(CmdResult),
    {
        // The caller prints the fatal diagnostic.
        let source =
            read_source(path.as_ref()).inspect_err(|e| debug!(error = %e, "aborting run"))?;
        self.execute_source(&source, emit);
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String> {
    let name = path.display().to_string();
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SayingsError::SourceNotFound(name),
        _ => SayingsError::SourceUnreadable { name, source },
    })
}
