use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(store.records().to_vec()))
}
