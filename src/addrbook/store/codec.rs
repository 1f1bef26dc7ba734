//! Flat-file line format.
//!
//! One contact per line, seven fields joined by a single comma, in
//! [`ContactField::ALL`] order. There is no header, no quoting and no escaping:
//! a value containing a comma or a newline produces a line that will not parse
//! back into the same record.
//!
//! Decoding works on raw bytes so that one line in a foreign encoding only
//! costs that line, not the whole file.

use crate::model::{Contact, ContactField, ContactFields};
use serde::Serialize;
use std::fmt;

pub const FIELD_SEPARATOR: char = ',';
pub const FIELD_COUNT: usize = 7;

/// Why a line could not become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "found", rename_all = "snake_case")]
pub enum LineProblem {
    /// Split into this many fields instead of seven.
    FieldCount(usize),
    /// Not valid UTF-8.
    Encoding,
}

impl fmt::Display for LineProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineProblem::FieldCount(found) => {
                write!(f, "expected {} fields, found {}", FIELD_COUNT, found)
            }
            LineProblem::Encoding => write!(f, "not valid UTF-8 text"),
        }
    }
}

/// A line from the data file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    /// 1-based line number in the file.
    pub line: usize,
    pub problem: LineProblem,
    /// The line as text, with invalid bytes replaced.
    pub raw: String,
    /// The line exactly as stored, without its terminator.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl RejectedLine {
    pub fn new(line: usize, problem: LineProblem, bytes: &[u8]) -> Self {
        Self {
            line,
            problem,
            raw: String::from_utf8_lossy(bytes).into_owned(),
            bytes: bytes.to_vec(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ParsedFile {
    pub records: Vec<ContactFields>,
    pub rejected: Vec<RejectedLine>,
}

pub fn encode_line(fields: &ContactFields) -> String {
    let parts: Vec<&str> = ContactField::ALL.iter().map(|f| fields.get(*f)).collect();
    parts.join(&FIELD_SEPARATOR.to_string())
}

/// Splits one line into a record. On failure returns the number of fields found.
pub fn decode_line(line: &str) -> Result<ContactFields, usize> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() != FIELD_COUNT {
        return Err(parts.len());
    }
    let mut fields = ContactFields::default();
    for (field, value) in ContactField::ALL.iter().zip(parts) {
        fields.set(*field, value);
    }
    Ok(fields)
}

/// Fields whose value would break the line format: the separator or a line break.
pub fn unstorable_fields(fields: &ContactFields) -> Vec<ContactField> {
    ContactField::ALL
        .iter()
        .copied()
        .filter(|f| {
            let value = fields.get(*f);
            value.contains(FIELD_SEPARATOR) || value.contains('\n') || value.contains('\r')
        })
        .collect()
}

pub fn encode(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&encode_line(&contact.fields));
        out.push('\n');
    }
    out
}

/// Parses a whole file. Empty lines are ignored; bad lines are collected, not fatal.
pub fn decode(content: &[u8]) -> ParsedFile {
    let mut parsed = ParsedFile::default();
    for (i, raw) in content.split(|b| *b == b'\n').enumerate() {
        let line = raw.strip_suffix(b"\r").unwrap_or(raw);
        if line.is_empty() {
            continue;
        }
        let text = match std::str::from_utf8(line) {
            Ok(text) => text,
            Err(_) => {
                parsed
                    .rejected
                    .push(RejectedLine::new(i + 1, LineProblem::Encoding, line));
                continue;
            }
        };
        match decode_line(text) {
            Ok(fields) => parsed.records.push(fields),
            Err(found) => parsed.rejected.push(RejectedLine::new(
                i + 1,
                LineProblem::FieldCount(found),
                line,
            )),
        }
    }
    parsed
}
