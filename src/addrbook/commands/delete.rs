use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactId;

/// Removes contacts by id. Pairs carry the listing number used in messages.
///
/// Every id is checked before anything is removed, so an unknown id leaves
/// the book untouched.
pub fn run(book: &mut ContactBook, targets: &[(usize, ContactId)]) -> Result<CmdResult> {
    for (_, id) in targets {
        if book.get(id).is_none() {
            return Err(crate::error::AddrbookError::ContactNotFound(*id));
        }
    }

    let mut result = CmdResult::default();
    for (index, id) in targets {
        let contact = book.remove(id)?;
        log::debug!("event=contact_delete id={}", id);
        result.add_message(CmdMessage::success(format!(
            "Contact deleted ({}): {}",
            index,
            contact.display_name()
        )));
        result.affected_contacts.push(contact);
    }
    Ok(result)
}

/// Removes the contact at a zero-based canonical position.
pub fn remove_at(book: &mut ContactBook, index: usize) -> Result<CmdResult> {
    let contact = book.remove_at(index)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted ({}): {}",
        index + 1,
        contact.display_name()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
