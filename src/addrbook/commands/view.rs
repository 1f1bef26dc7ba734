use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::{AddrbookError, Result};
use crate::index::DisplayContact;
use crate::model::ContactId;

pub fn run(book: &ContactBook, targets: &[(usize, ContactId)]) -> Result<CmdResult> {
    let listed = targets
        .iter()
        .map(|(index, id)| {
            book.get(id)
                .map(|contact| DisplayContact {
                    index: *index,
                    contact: contact.clone(),
                })
                .ok_or(AddrbookError::ContactNotFound(*id))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_contacts(listed))
}
