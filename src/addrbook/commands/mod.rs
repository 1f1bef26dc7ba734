//! # Command Layer
//!
//! One module per operation. Each `run` function takes the [`ContactBook`]
//! and, when it needs persistence, a [`DataStore`], and returns a
//! [`CmdResult`].
//!
//! Commands never print, prompt or exit. Anything the user should see is a
//! [`CmdMessage`] in the result, and confirmations for destructive operations
//! are the caller's job.
//!
//! [`ContactBook`]: crate::book::ContactBook
//! [`DataStore`]: crate::store::DataStore

use crate::config::AddrbookConfig;
use crate::index::DisplayContact;
use crate::model::{Contact, ContactFields};
use crate::store::{codec, RejectedLine};

pub mod add;
pub mod check;
pub mod clear;
pub mod config;
pub mod delete;
pub mod filter;
pub mod list;
pub mod load;
pub mod save;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<DisplayContact>,
    pub rejected_lines: Vec<RejectedLine>,
    pub config: Option<AddrbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<DisplayContact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_rejected_lines(mut self, lines: Vec<RejectedLine>) -> Self {
        self.rejected_lines = lines;
        self
    }

    pub fn with_config(mut self, config: AddrbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Warns when a value can't survive the line format, so the contact would be
/// dropped by the next load.
fn unstorable_warning(fields: &ContactFields) -> Option<CmdMessage> {
    let bad = codec::unstorable_fields(fields);
    if bad.is_empty() {
        return None;
    }
    let labels: Vec<&str> = bad.iter().map(|f| f.label()).collect();
    Some(CmdMessage::warning(format!(
        "{} contains a comma or line break; this contact will not load back from the data file",
        labels.join(", ")
    )))
}
