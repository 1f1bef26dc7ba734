use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{codec, DataStore};

/// Reports lines in the stored data that would not load. Changes nothing.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let content = match store.read()? {
        Some(content) => content,
        None => {
            result.add_message(CmdMessage::info(format!(
                "No data file yet at {}",
                store.location()
            )));
            return Ok(result);
        }
    };

    let parsed = codec::decode(&content);
    if parsed.rejected.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "{}: {} record(s), no problems found",
            store.location(),
            parsed.records.len()
        )));
    } else {
        for rejected in &parsed.rejected {
            result.add_message(CmdMessage::warning(format!(
                "line {}: {}",
                rejected.line, rejected.problem
            )));
        }
        result.add_message(CmdMessage::error(format!(
            "{}: {} record(s), {} malformed line(s)",
            store.location(),
            parsed.records.len(),
            parsed.rejected.len()
        )));
    }
    Ok(result.with_rejected_lines(parsed.rejected))
}
