use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_contacts;
use crate::model::ContactField;

/// Lists the whole book, in canonical order or sorted by `sort`.
pub fn run(book: &ContactBook, sort: Option<ContactField>) -> Result<CmdResult> {
    let listed = match sort {
        Some(field) => index_contacts(book, book.sorted_by(field)),
        None => index_contacts(book, book.all()),
    };
    Ok(CmdResult::default().with_listed_contacts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactFields;

    fn book() -> ContactBook {
        let mut book = ContactBook::new();
        book.add(ContactFields::new("Amy", "Zane", "", "", "", "")).unwrap();
        book.add(ContactFields::new("bob", "adams", "", "", "", "")).unwrap();
        book
    }

    #[test]
    fn canonical_listing() {
        let result = run(&book(), None).unwrap();
        let names: Vec<String> = result
            .listed_contacts
            .iter()
            .map(|dc| dc.contact.display_name())
            .collect();
        assert_eq!(names, vec!["Amy Zane", "bob adams"]);
    }

    #[test]
    fn sorted_listing_keeps_canonical_numbers() {
        let result = run(&book(), Some(ContactField::LastName)).unwrap();
        let entries: Vec<(usize, String)> = result
            .listed_contacts
            .iter()
            .map(|dc| (dc.index, dc.contact.display_name()))
            .collect();
        assert_eq!(
            entries,
            vec![(2, "bob adams".to_string()), (1, "Amy Zane".to_string())]
        );
    }
}
