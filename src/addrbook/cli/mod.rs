//! # CLI Behavior
//!
//! This is **one possible UI client** for addrbook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Load / Save Checkpoints
//!
//! Every command that reads the book loads it first. Commands that change it
//! (`add`, `edit`, `delete`, `clear`) save exactly once, after the change
//! succeeded. A failed command never writes.
//!
//! ### Naked Execution (`addrbook`)
//!
//! Running `addrbook` with no arguments defaults to `addrbook list`.
//!
//! ### Selecting Contacts
//!
//! `view`, `edit` and `delete` take either listing numbers (`addrbook delete 2 5`)
//! or words from a name (`addrbook view amy lee`). Numbers always mean the
//! position in the plain `list` output, even when read off a sorted or
//! filtered listing.
//!
//! ### Entering Fields
//!
//! `add` and `edit` accept `--first`, `--last`, `--address`, `--mobile`,
//! `--secondary`, `--email` and `--picture`. Without any of them the fields are
//! read one per line from stdin, with a prompt when stdin is a terminal.
//! End of input cancels without changing anything.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `print`: Output formatting (lists, details, messages, JSON)
//! - `prompt`: Field entry and confirmations
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
mod prompt;
pub mod setup;

pub use commands::run;
