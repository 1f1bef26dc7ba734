use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;

pub fn run(book: &ContactBook, query: &str) -> Result<CmdResult> {
    let matches = book.filter(query)?;
    log::debug!("event=book_filter matches={}", matches.len());

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts match \"{}\".",
            query
        )));
    }
    Ok(result.with_listed_contacts(index_contacts(book, matches)))
}
