//! # Addrbook Architecture
//!
//! Addrbook is a **UI-agnostic contact-management library**. The binary that
//! ships with it is one client among possible others.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, confirms, formats output      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory book and the storage backend          │
//! │  - Normalizes inputs (numbers / names → ContactIds)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book (book.rs) + Storage (store/)                          │
//! │  - Ordered contact sequence, sort and filter views          │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The book is held in memory. Nothing reaches disk until
//! [`api::AddrbookApi::save`] is called; the CLI saves once at the end of
//! every mutating command. The data file is plain text, one contact per line,
//! seven comma-separated fields (see [`store::codec`]).
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never prompts.
//! Diagnostics go through the `log` facade; see [`logging`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`book`]: The ordered contact collection
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, flat-file codec and implementations
//! - [`model`]: Core data types (`Contact`, `ContactFields`, `ContactField`)
//! - [`index`]: Listing numbers and selector resolution
//! - [`config`]: Configuration management
//! - [`logging`]: One-time logger setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
