//! # API Facade
//!
//! [`AddrbookApi`] is the application context: it owns the in-memory
//! [`ContactBook`], the injected [`DataStore`], and the load/save checkpoint
//! state. Every UI goes through it.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs**: raw selector words become [`ContactId`]s before
//!   any command runs, so nothing downstream acts on a position
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, prompt or decide when to save. Mutations only touch
//! memory until the caller asks for [`AddrbookApi::save`].
//!
//! ## Generic Over DataStore
//!
//! - Production: `AddrbookApi<FileStore>`
//! - Testing: `AddrbookApi<InMemoryStore>`

use crate::book::ContactBook;
use crate::commands;
use crate::config::MalformedLinePolicy;
use crate::error::{AddrbookError, Result};
use crate::index::{parse_selectors, resolve_selectors};
use crate::model::{ContactField, ContactFields, ContactId};
use crate::store::{DataStore, RejectedLine};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Where the book keeps its configuration and data.
#[derive(Debug, Clone)]
pub struct AddrbookPaths {
    pub home: PathBuf,
    pub data_file: PathBuf,
}

pub struct AddrbookApi<S: DataStore> {
    store: S,
    book: ContactBook,
    paths: AddrbookPaths,
    policy: MalformedLinePolicy,
    pending_quarantine: Vec<RejectedLine>,
}

impl<S: DataStore> AddrbookApi<S> {
    pub fn new(store: S, paths: AddrbookPaths, policy: MalformedLinePolicy) -> Self {
        Self {
            store,
            book: ContactBook::new(),
            paths,
            policy,
            pending_quarantine: Vec::new(),
        }
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let result = commands::load::run(&mut self.book, &self.store, self.policy)?;
        self.pending_quarantine = match self.policy {
            MalformedLinePolicy::Quarantine => result.rejected_lines.clone(),
            _ => Vec::new(),
        };
        Ok(result)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&self.book, &mut self.store, &mut self.pending_quarantine)
    }

    pub fn add_contact(&mut self, fields: ContactFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, fields)
    }

    /// Edits a single contact picked by `selector` words.
    pub fn update_contact<I: AsRef<str>>(
        &mut self,
        selector: &[I],
        fields: ContactFields,
    ) -> Result<commands::CmdResult> {
        let (index, id) = self.resolve_one(selector)?;
        commands::update::run(&mut self.book, index, &id, fields)
    }

    pub fn delete_contacts<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let targets = self.resolve(selectors)?;
        commands::delete::run(&mut self.book, &targets)
    }

    /// Positional delete against the canonical order (zero-based).
    pub fn remove_at(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::delete::remove_at(&mut self.book, index)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.book)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, None)
    }

    pub fn sorted_by(&self, field: ContactField) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, Some(field))
    }

    pub fn filter(&self, query: &str) -> Result<commands::CmdResult> {
        commands::filter::run(&self.book, query)
    }

    pub fn view_contacts<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let targets = self.resolve(selectors)?;
        commands::view::run(&self.book, &targets)
    }

    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths.home, action)
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.book
    }

    pub fn paths(&self) -> &AddrbookPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn last_saved(&self) -> Result<Option<DateTime<Utc>>> {
        self.store.last_modified()
    }

    fn resolve<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<(usize, ContactId)>> {
        let selectors = parse_selectors(inputs)?;
        resolve_selectors(&self.book, &selectors)
    }

    fn resolve_one<I: AsRef<str>>(&self, inputs: &[I]) -> Result<(usize, ContactId)> {
        let mut targets = self.resolve(inputs)?;
        if targets.len() != 1 {
            return Err(AddrbookError::Api(
                "Select exactly one contact to edit".to_string(),
            ));
        }
        Ok(targets.remove(0))
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
