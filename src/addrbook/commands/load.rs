use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::MalformedLinePolicy;
use crate::error::{AddrbookError, Result};
use crate::model::Contact;
use crate::store::{codec, DataStore};

/// Replaces the book's contents with what the store holds.
///
/// A store with no data leaves the book empty. Lines that don't split into
/// seven fields, or aren't UTF-8, are handled per `policy`; under `Fail` the book is left
/// exactly as it was. The data itself is never rewritten here: quarantining
/// happens on the next save (see [`crate::commands::save`]).
pub fn run<S: DataStore>(
    book: &mut ContactBook,
    store: &S,
    policy: MalformedLinePolicy,
) -> Result<CmdResult> {
    let content = match store.read()? {
        Some(content) => content,
        None => {
            log::info!(
                "event=book_load status=missing path={}",
                store.location()
            );
            book.replace_all(Vec::new());
            return Ok(CmdResult::default());
        }
    };

    let parsed = codec::decode(&content);

    if let Some(first) = parsed.rejected.first() {
        if policy == MalformedLinePolicy::Fail {
            log::error!(
                "event=book_load status=failed path={} line={} problem={:?}",
                store.location(),
                first.line,
                first.problem
            );
            return Err(AddrbookError::MalformedLine {
                line: first.line,
                problem: first.problem,
            });
        }
        for rejected in &parsed.rejected {
            log::warn!(
                "event=book_load_skip path={} line={} problem={:?}",
                store.location(),
                rejected.line,
                rejected.problem
            );
        }
    }

    let contacts: Vec<Contact> = parsed.records.into_iter().map(Contact::new).collect();
    log::info!(
        "event=book_load status=ok path={} contacts={} rejected={}",
        store.location(),
        contacts.len(),
        parsed.rejected.len()
    );
    book.replace_all(contacts);

    let mut result = CmdResult::default();
    if !parsed.rejected.is_empty() {
        let lines: Vec<String> = parsed.rejected.iter().map(|r| r.line.to_string()).collect();
        let suffix = match policy {
            MalformedLinePolicy::Quarantine => " (kept aside on next save)",
            _ => "",
        };
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed line(s) in {}: {}{}",
            parsed.rejected.len(),
            store.location(),
            lines.join(", "),
            suffix
        )));
    }
    Ok(result.with_rejected_lines(parsed.rejected))
}
