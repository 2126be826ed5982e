//! # Storage Layer
//!
//! The [`RecordStore`] trait is the storage seam for the interpreter. Commands
//! are written against the trait, never against a concrete collection.
//!
//! A store is an ordered sequence of records:
//! - insertion order is the only order (no sorting, no deduplication)
//! - duplicates are allowed
//! - removal keeps the relative order of the survivors
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed store living for one run.
//!   Nothing is persisted.

use crate::model::Record;

pub mod memory;

pub trait RecordStore {
    /// Append a record at the end of the sequence.
    fn append(&mut self, record: Record);

    /// Remove every record for which `predicate` holds, keeping the order of
    /// the rest. Returns the removed records in their former order.
    fn remove_where<F>(&mut self, predicate: F) -> Vec<Record>
    where
        F: FnMut(&Record) -> bool;

    /// All records in insertion order.
    fn records(&self) -> &[Record];

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
