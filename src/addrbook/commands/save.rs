use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{codec, DataStore, RejectedLine};

/// Writes every contact, in canonical order, replacing the stored data.
///
/// `quarantine` holds lines dropped by the last load; they are handed to the
/// store before the data is overwritten and drained once the store has them,
/// so a retry after a failed write doesn't set them aside twice. On error the
/// book is untouched.
pub fn run<S: DataStore>(
    book: &ContactBook,
    store: &mut S,
    quarantine: &mut Vec<RejectedLine>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !quarantine.is_empty() {
        store.quarantine(quarantine)?;
        result.add_message(CmdMessage::warning(format!(
            "Moved {} malformed line(s) out of {}",
            quarantine.len(),
            store.location()
        )));
        quarantine.clear();
    }

    let content = codec::encode(book.all());
    store.write(&content)?;
    log::info!(
        "event=book_save status=ok path={} contacts={}",
        store.location(),
        book.len()
    );

    result.add_message(CmdMessage::info(format!(
        "Saved {} contact(s) to {}",
        book.len(),
        store.location()
    )));
    Ok(result)
}
