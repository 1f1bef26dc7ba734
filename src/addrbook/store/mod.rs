//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam. A store only moves the raw
//! bytes of the data file in and out; the line format lives in [`codec`] so that
//! every backend reads and writes exactly the same bytes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the flat file on disk.
//!   - Missing file reads as "no data yet"
//!   - Writes go to a temp file in the same directory, then get renamed over
//!     the data file
//!   - Quarantined lines are appended to `<data file>.rejected`
//!
//! - [`memory::InMemoryStore`]: keeps the file contents in a `String`, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! Amy,Lee,1 High St,0711,0800,amy@mail.io,
//! Bob,Zane,2 Low Rd,0722,,bob@post.io,/home/bob/me.png
//! ```

use crate::error::Result;
use chrono::{DateTime, Utc};

pub mod codec;
pub mod fs;
pub mod memory;

pub use codec::{LineProblem, RejectedLine};

/// Abstract interface for the contact data file.
pub trait DataStore {
    /// Raw file contents, or `None` when nothing has been saved yet.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the file contents.
    fn write(&mut self, content: &str) -> Result<()>;

    /// Set aside lines that could not be parsed so a later save doesn't lose them.
    fn quarantine(&mut self, lines: &[RejectedLine]) -> Result<()>;

    /// When the data was last written, if it exists.
    fn last_modified(&self) -> Result<Option<DateTime<Utc>>>;

    /// Human readable location, used in messages and logs.
    fn location(&self) -> String;
}
