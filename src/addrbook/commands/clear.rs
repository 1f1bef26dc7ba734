use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut ContactBook) -> Result<CmdResult> {
    let removed = book.clear();
    log::info!("event=book_clear removed={}", removed);

    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info("Address book is already empty."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "All entries erased ({} contact(s)).",
            removed
        )));
    }
    Ok(result)
}
