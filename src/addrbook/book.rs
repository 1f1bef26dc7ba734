//! # Contact Book
//!
//! [`ContactBook`] is the in-memory, ordered collection of contacts. It owns the
//! canonical order (the order contacts are listed and saved in) and provides
//! the query operations that produce views over it.
//!
//! ## Canonical order vs. views
//!
//! Adding a contact re-sorts the canonical order by first name
//! (case-insensitive, stable). Editing a contact leaves it where it is.
//!
//! [`ContactBook::sorted_by`] and [`ContactBook::filter`] never touch the
//! canonical order. They return a freshly computed `Vec<&Contact>`, so a view
//! can't outlive a mutation of the book.
//!
//! ## Identity
//!
//! Every contact carries a [`ContactId`]. Positional access ([`ContactBook::remove_at`])
//! exists for callers that hold a canonical position, but anything that came
//! from a view must go through the id-based methods.

use crate::error::{AddrbookError, Result};
use crate::model::{Contact, ContactField, ContactFields, ContactId};

#[derive(Debug, Default, Clone)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book that keeps `contacts` in the given order.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Canonical order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| &c.id == id)
    }

    /// Appends a contact and re-sorts by first name.
    ///
    /// Rejects input where all seven fields are empty.
    pub fn add(&mut self, fields: ContactFields) -> Result<ContactId> {
        if fields.is_blank() {
            return Err(AddrbookError::EmptyContact);
        }
        let contact = Contact::new(fields);
        let id = contact.id;
        self.contacts.push(contact);
        sort_by_field(&mut self.contacts, ContactField::FirstName);
        Ok(id)
    }

    /// Overwrites the fields of an existing contact. Its id and position are kept.
    pub fn update(&mut self, id: &ContactId, fields: ContactFields) -> Result<&Contact> {
        if fields.is_blank() {
            return Err(AddrbookError::EmptyContact);
        }
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(AddrbookError::ContactNotFound(*id))?;
        contact.fields = fields;
        Ok(contact)
    }

    /// Removes the contact at a zero-based canonical position.
    pub fn remove_at(&mut self, index: usize) -> Result<Contact> {
        if index >= self.contacts.len() {
            return Err(AddrbookError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(self.contacts.remove(index))
    }

    pub fn remove(&mut self, id: &ContactId) -> Result<Contact> {
        let index = self
            .position(id)
            .ok_or(AddrbookError::ContactNotFound(*id))?;
        Ok(self.contacts.remove(index))
    }

    /// Empties the book, returning how many contacts were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.contacts.len();
        self.contacts.clear();
        count
    }

    /// Replaces the whole collection, keeping the given order.
    pub(crate) fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// A view sorted ascending, case-insensitive, by `field`. Ties keep canonical order.
    pub fn sorted_by(&self, field: ContactField) -> Vec<&Contact> {
        let mut view: Vec<&Contact> = self.contacts.iter().collect();
        view.sort_by_key(|c| c.fields.get(field).to_lowercase());
        view
    }

    /// Contacts where `query` appears, ignoring case, in any searchable field.
    ///
    /// An empty or whitespace-only query is rejected. No matches is an empty
    /// view, not an error.
    pub fn filter(&self, query: &str) -> Result<Vec<&Contact>> {
        if query.trim().is_empty() {
            return Err(AddrbookError::EmptyQuery);
        }
        let needle = query.to_lowercase();
        Ok(self
            .contacts
            .iter()
            .filter(|c| {
                ContactField::SEARCHABLE
                    .iter()
                    .any(|f| c.fields.get(*f).to_lowercase().contains(&needle))
            })
            .collect())
    }
}

fn sort_by_field(contacts: &mut [Contact], field: ContactField) {
    contacts.sort_by_key(|c| c.fields.get(field).to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str) -> ContactFields {
        ContactFields::new(first, last, "", "", "", "")
    }

    fn names(view: &[&Contact]) -> Vec<String> {
        view.iter().map(|c| c.display_name()).collect()
    }

    fn book_names(book: &ContactBook) -> Vec<String> {
        book.all().iter().map(|c| c.display_name()).collect()
    }

    #[test]
    fn add_sorts_by_first_name_ignoring_case() {
        let mut book = ContactBook::new();
        book.add(fields("Amy", "Lee")).unwrap();
        book.add(fields("bob", "Zane")).unwrap();
        assert_eq!(book_names(&book), vec!["Amy Lee", "bob Zane"]);

        book.add(fields("alice", "Moss")).unwrap();
        assert_eq!(book_names(&book), vec!["alice Moss", "Amy Lee", "bob Zane"]);
    }

    #[test]
    fn add_keeps_insertion_order_for_equal_first_names() {
        let mut book = ContactBook::new();
        book.add(fields("Sam", "First")).unwrap();
        book.add(fields("sam", "Second")).unwrap();
        book.add(fields("SAM", "Third")).unwrap();
        assert_eq!(
            book_names(&book),
            vec!["Sam First", "sam Second", "SAM Third"]
        );
    }

    #[test]
    fn add_rejects_all_blank_input() {
        let mut book = ContactBook::new();
        book.add(fields("Amy", "Lee")).unwrap();

        let err = book.add(ContactFields::default()).unwrap_err();
        assert!(matches!(err, AddrbookError::EmptyContact));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_accepts_a_single_non_empty_field() {
        let mut book = ContactBook::new();
        book.add(ContactFields::default().with_picture("me.png"))
            .unwrap();
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut book = ContactBook::new();
        book.add(fields("Amy", "Lee")).unwrap();
        let bob = book.add(fields("Bob", "Zane")).unwrap();

        book.update(&bob, fields("Aaron", "Zane")).unwrap();

        // no re-sort on edit
        assert_eq!(book_names(&book), vec!["Amy Lee", "Aaron Zane"]);
        assert_eq!(book.position(&bob), Some(1));
        assert_eq!(book.get(&bob).unwrap().fields.first_name, "Aaron");
    }

    #[test]
    fn update_rejects_blank_and_unknown() {
        let mut book = ContactBook::new();
        let amy = book.add(fields("Amy", "Lee")).unwrap();

        assert!(matches!(
            book.update(&amy, ContactFields::default()),
            Err(AddrbookError::EmptyContact)
        ));
        assert_eq!(book.get(&amy).unwrap().fields.first_name, "Amy");

        let stranger = ContactId::new();
        assert!(matches!(
            book.update(&stranger, fields("X", "Y")),
            Err(AddrbookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn remove_at_out_of_range_leaves_book_unchanged() {
        let mut book = ContactBook::new();
        book.add(fields("Amy", "Lee")).unwrap();
        book.add(fields("Bob", "Zane")).unwrap();

        let err = book.remove_at(2).unwrap_err();
        assert!(matches!(
            err,
            AddrbookError::IndexOutOfRange { index: 2, len: 2 }
        ));
        assert_eq!(book.len(), 2);

        let removed = book.remove_at(0).unwrap();
        assert_eq!(removed.display_name(), "Amy Lee");
        assert_eq!(book_names(&book), vec!["Bob Zane"]);
    }

    #[test]
    fn remove_by_id() {
        let mut book = ContactBook::new();
        let amy = book.add(fields("Amy", "Lee")).unwrap();
        book.add(fields("Bob", "Zane")).unwrap();

        book.remove(&amy).unwrap();
        assert!(book.get(&amy).is_none());
        assert!(matches!(
            book.remove(&amy),
            Err(AddrbookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn clear_empties_everything() {
        let mut book = ContactBook::new();
        book.add(fields("Amy", "Lee")).unwrap();
        book.add(fields("Bob", "Zane")).unwrap();
        assert_eq!(book.clear(), 2);
        assert!(book.is_empty());
    }

    #[test]
    fn sorted_by_does_not_touch_canonical_order() {
        let mut book = ContactBook::new();
        book.add(fields("Amy", "zane")).unwrap();
        book.add(fields("Bob", "Adams")).unwrap();

        let by_last = book.sorted_by(ContactField::LastName);
        assert_eq!(names(&by_last), vec!["Bob Adams", "Amy zane"]);
        assert_eq!(book_names(&book), vec!["Amy zane", "Bob Adams"]);
    }

    #[test]
    fn sorting_is_idempotent_and_last_key_wins() {
        let book = ContactBook::from_contacts(vec![
            Contact::new(fields("carl", "Black")),
            Contact::new(fields("Amy", "Cole")),
            Contact::new(fields("bea", "Able")),
            Contact::new(fields("amy", "Baker")),
        ]);

        let by_first = book.sorted_by(ContactField::FirstName);
        let resorted = ContactBook::from_contacts(by_first.iter().map(|c| (*c).clone()).collect());
        assert_eq!(
            names(&resorted.sorted_by(ContactField::FirstName)),
            names(&by_first)
        );

        // last_name then first_name: the first_name key decides, ties fall back
        // to the last_name order produced by the first pass.
        let by_last: Vec<Contact> = book
            .sorted_by(ContactField::LastName)
            .into_iter()
            .cloned()
            .collect();
        let then_first = ContactBook::from_contacts(by_last);
        assert_eq!(
            names(&then_first.sorted_by(ContactField::FirstName)),
            vec!["amy Baker", "Amy Cole", "bea Able", "carl Black"]
        );
    }

    #[test]
    fn sorted_by_any_field() {
        let book = ContactBook::from_contacts(vec![
            Contact::new(ContactFields::new("A", "", "", "", "", "z@x")),
            Contact::new(ContactFields::new("B", "", "", "", "", "a@x")),
        ]);
        let view = book.sorted_by(ContactField::EmailAddress);
        assert_eq!(view[0].fields.first_name, "B");
    }

    #[test]
    fn filter_matches_any_searchable_field() {
        let book = ContactBook::from_contacts(vec![
            Contact::new(ContactFields::new("Amy", "Lee", "1 High St", "0711", "", "amy@mail.io")),
            Contact::new(ContactFields::new("Bob", "Zane", "2 Low Rd", "0722", "0800", "bob@post.io")),
        ]);

        assert_eq!(names(&book.filter("POST").unwrap()), vec!["Bob Zane"]);
        assert_eq!(names(&book.filter("high").unwrap()), vec!["Amy Lee"]);
        assert_eq!(names(&book.filter("07").unwrap()).len(), 2);
        assert!(book.filter("nobody").unwrap().is_empty());
    }

    #[test]
    fn filter_ignores_picture_path() {
        let book = ContactBook::from_contacts(vec![Contact::new(
            fields("Amy", "Lee").with_picture("/pics/holiday.png"),
        )]);
        assert!(book.filter("holiday").unwrap().is_empty());
    }

    #[test]
    fn filter_rejects_blank_query() {
        let book = ContactBook::new();
        assert!(matches!(book.filter(""), Err(AddrbookError::EmptyQuery)));
        assert!(matches!(book.filter("   "), Err(AddrbookError::EmptyQuery)));
    }
}
