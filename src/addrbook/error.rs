use crate::model::ContactId;
use crate::store::LineProblem;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrbookError {
    #[error("Contact is empty: enter at least one field")]
    EmptyContact,

    #[error("Filter query is empty")]
    EmptyQuery,

    #[error("No contact selected")]
    NoSelection,

    #[error("Index {index} is out of range (book has {len} contacts)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("\"{term}\" matches {count} contacts, please be more specific")]
    AmbiguousSelector { term: String, count: usize },

    #[error("Malformed record on line {line}: {problem}")]
    MalformedLine { line: usize, problem: LineProblem },

    /// Failure reading or writing a specific file.
    #[error("IO error on {}: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Terminal IO (prompts, confirmations).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl AddrbookError {
    /// Wraps an `io::Error` with the file it happened on.
    pub fn file_io(path: &Path) -> impl FnOnce(std::io::Error) -> AddrbookError + '_ {
        move |source| AddrbookError::FileIo {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AddrbookError>;
