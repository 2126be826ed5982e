//! Business logic for each interpreter command.
//!
//! Every command is a `run` function over a [`RecordStore`](crate::store::RecordStore)
//! returning a [`CmdResult`]. Nothing here prints; the caller decides how to
//! present records and diagnostics.

use crate::model::Record;

pub mod add;
pub mod print;
pub mod remove;

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records appended (ADD) or removed (REM) by the command.
    pub affected_records: Vec<Record>,
    /// Records to show, in store order (PRINT).
    pub listed_records: Vec<Record>,
    /// Console diagnostics for a rejected line, already in their final wording.
    pub diagnostics: Vec<String>,
}

impl CmdResult {
    pub fn add_diagnostic(&mut self, diagnostic: impl Into<String>) {
        self.diagnostics.push(diagnostic.into());
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// True when there is something for the caller to show.
    pub fn is_reportable(&self) -> bool {
        !self.listed_records.is_empty() || self.has_errors()
    }
}
