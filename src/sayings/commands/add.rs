use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Fields, Record};
use crate::store::RecordStore;
use tracing::debug;

pub fn run<S: RecordStore>(store: &mut S, type_tag: &str, fields: &Fields) -> Result<CmdResult> {
    let record = Record::create(type_tag, fields)?;
    debug!(record_type = type_tag, content = record.content(), "appending record");
    store.append(record.clone());
    Ok(CmdResult::default().with_affected_records(vec![record]))
}
