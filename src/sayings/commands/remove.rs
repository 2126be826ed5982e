use crate::command::Predicate;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;
use tracing::debug;

/// Drops every record matching `predicate`. Matching nothing is not an error.
pub fn run<S: RecordStore>(store: &mut S, predicate: &Predicate) -> Result<CmdResult> {
    let removed = store.remove_where(|record| predicate.matches(record));
    debug!(
        predicate = %predicate,
        removed = removed.len(),
        remaining = store.len(),
        "removed records"
    );
    Ok(CmdResult::default().with_affected_records(removed))
}
