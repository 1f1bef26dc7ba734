//! # Display Indexes
//!
//! Users pick contacts by the number shown next to them in a listing (`1`, `2`,
//! ...) or by typing part of a name. Neither is a stable handle: numbers shift
//! whenever the book is re-sorted, and names aren't unique.
//!
//! So every selector is resolved to a [`ContactId`] *before* anything is
//! mutated, and commands only ever act on ids. Numbers always refer to the
//! canonical listing (what `list` prints with no sort option), never to a
//! sorted or filtered view.

use crate::book::ContactBook;
use crate::error::{AddrbookError, Result};
use crate::model::{Contact, ContactId};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A contact paired with the 1-based number it is shown under.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayContact {
    pub index: usize,
    pub contact: Contact,
}

/// Numbers the entries of a view with their canonical listing number.
///
/// A sorted or filtered view keeps the numbers from the canonical listing, so
/// a number read off any view selects the same contact.
pub fn index_contacts<'a, I>(book: &ContactBook, view: I) -> Vec<DisplayContact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    view.into_iter()
        .filter_map(|c| {
            book.position(&c.id).map(|pos| DisplayContact {
                index: pos + 1,
                contact: c.clone(),
            })
        })
        .collect()
}

/// A user input to select a contact, either by its listing number or part of its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSelector {
    Index(usize),
    Name(String),
}

impl fmt::Display for ContactSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactSelector::Index(i) => write!(f, "{}", i),
            ContactSelector::Name(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for ContactSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(ContactSelector::Index(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// Turns raw user words into selectors.
///
/// If every word is a number they are read as listing numbers. Otherwise the
/// words are joined with spaces into a single name search.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ContactSelector>> {
    if inputs.is_empty() {
        return Err(AddrbookError::NoSelection);
    }

    let all_indexes: std::result::Result<Vec<ContactSelector>, _> = inputs
        .iter()
        .map(|s| ContactSelector::from_str(s.as_ref()))
        .collect();

    if let Ok(selectors) = all_indexes {
        return Ok(selectors);
    }

    let term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    if term.trim().is_empty() {
        return Err(AddrbookError::NoSelection);
    }
    Ok(vec![ContactSelector::Name(term)])
}

/// Resolves selectors against the canonical order. Duplicates collapse to one id.
pub fn resolve_selectors(
    book: &ContactBook,
    selectors: &[ContactSelector],
) -> Result<Vec<(usize, ContactId)>> {
    if selectors.is_empty() {
        return Err(AddrbookError::NoSelection);
    }

    let mut resolved: Vec<(usize, ContactId)> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let hit = resolve_one(book, selector)?;
        if !resolved.iter().any(|(_, id)| *id == hit.1) {
            resolved.push(hit);
        }
    }
    Ok(resolved)
}

fn resolve_one(book: &ContactBook, selector: &ContactSelector) -> Result<(usize, ContactId)> {
    let contacts = book.all();
    match selector {
        ContactSelector::Index(n) => contacts
            .get(n.wrapping_sub(1))
            .map(|c| (*n, c.id))
            .ok_or(AddrbookError::IndexOutOfRange {
                index: *n,
                len: contacts.len(),
            }),
        ContactSelector::Name(term) => {
            let needle = term.to_lowercase();
            let matches: Vec<(usize, &Contact)> = contacts
                .iter()
                .enumerate()
                .filter(|(_, c)| c.display_name().to_lowercase().contains(&needle))
                .collect();

            // an exact display-name hit wins over partial ones
            let exact: Vec<&(usize, &Contact)> = matches
                .iter()
                .filter(|(_, c)| c.display_name().to_lowercase() == needle)
                .collect();
            if exact.len() == 1 {
                return Ok((exact[0].0 + 1, exact[0].1.id));
            }

            match matches.len() {
                0 => Err(AddrbookError::Api(format!(
                    "No contact matches \"{}\"",
                    term
                ))),
                1 => Ok((matches[0].0 + 1, matches[0].1.id)),
                count => Err(AddrbookError::AmbiguousSelector {
                    term: term.clone(),
                    count,
                }),
            }
        }
    }
}
