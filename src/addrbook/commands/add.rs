use crate::book::ContactBook;
use crate::commands::{unstorable_warning, CmdMessage, CmdResult};
use crate::error::{AddrbookError, Result};
use crate::model::ContactFields;

pub fn run(book: &mut ContactBook, fields: ContactFields) -> Result<CmdResult> {
    let warning = unstorable_warning(&fields);
    let id = book.add(fields)?;
    let contact = book
        .get(&id)
        .cloned()
        .ok_or(AddrbookError::ContactNotFound(id))?;

    log::debug!("event=contact_add id={} total={}", id, book.len());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added: {}",
        contact.display_name()
    )));
    if let Some(warning) = warning {
        result.add_message(warning);
    }
    Ok(result.with_affected_contacts(vec![contact]))
}
