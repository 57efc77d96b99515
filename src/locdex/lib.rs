//! # Locdex Architecture
//!
//! Locdex manages a short list of "location" records (name, address, state,
//! city, zip and an enabled/disabled flag). It is a **UI-agnostic library**
//! with a small command-line client on top; the same core could sit behind a
//! web page or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session, resolves selectors → ids               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: locations.rs, filter.rs, selection.rs, wire.rs       │
//! │  Storage (storage/): Storage trait, FileStorage, Memory     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session state
//!
//! There are no globals. A [`commands::Session`] bundles the record store,
//! the selection and the current query; it is built at startup and handed to
//! every command. Selection and query live only as long as the session, while
//! the records are written to storage after every change.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code never touches stdout/stderr and never exits the
//! process. The only I/O is the [`storage::Storage`] implementation chosen by
//! the caller, and its write failures are logged and swallowed.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each user action
//! - [`locations`]: the record store
//! - [`filter`]: query → visible rows
//! - [`selection`]: selected ids and the none/some/all aggregate
//! - [`wire`]: export/import JSON shape and the status string mapping
//! - [`seed`]: the built-in starting list
//! - [`storage`]: snapshot persistence
//! - [`index`]: row numbering and user selectors
//! - [`model`]: `Location`, `LocationFields`, `Counts`
//! - [`config`]: configuration file
//! - [`clipboard`]: platform clipboard for exports
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod locations;
pub mod model;
pub mod seed;
pub mod selection;
pub mod storage;
pub mod wire;
