use crate::book::ContactBook;
use crate::commands::{unstorable_warning, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContactFields, ContactId};

/// Overwrites one contact's fields. `index` is only used for the message.
pub fn run(
    book: &mut ContactBook,
    index: usize,
    id: &ContactId,
    fields: ContactFields,
) -> Result<CmdResult> {
    let warning = unstorable_warning(&fields);
    let contact = book.update(id, fields)?.clone();
    log::debug!("event=contact_update id={}", id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated ({}): {}",
        index,
        contact.display_name()
    )));
    if let Some(warning) = warning {
        result.add_message(warning);
    }
    Ok(result.with_affected_contacts(vec![contact]))
}
