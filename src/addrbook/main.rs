//! # Addrbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/addrbook/cli/)                              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, load/save checkpoints (commands.rs)      │
//! │  - Field and confirmation prompts (prompt.rs)               │
//! │  - Terminal output (print.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                addrbook::api::AddrbookApi<FileStore>
//! ```
//!
//! Everything the library returns is a `CmdResult`; deciding what reaches the
//! terminal, and when the book is written back, is this layer's job.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
