//! # Cookie Bookie Architecture
//!
//! Cookie Bookie is a **UI-agnostic recipe box**. The library owns the recipe collection,
//! its persistence and the rules around editing it; a UI (the bundled CLI, or anything else)
//! supplies form input, answers confirmation prompts and renders what it is handed back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints recipe cards           │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, edit session and search query                │
//! │  - Re-renders the view after every mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, session.rs, query.rs)        │
//! │  - Validation, edit-session transitions, notifications      │
//! │  - Pure view derivation (sort + search)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore: in-memory collection, write-through         │
//! │  - Persistence: JSON array under one key                    │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control Flow
//!
//! Form input is validated, applied to the store, written to storage, and the view for the
//! current search query is recomputed and returned. Deletes and clear-all ask a
//! [`confirm::Confirm`] first; a declined prompt changes nothing and writes nothing.
//!
//! ## Errors
//!
//! Only validation failures reach the caller, as [`error::BookieError::Validation`] whose
//! message is the status line to show. Unknown ids are silently ignored. Corrupt storage
//! loads as an empty collection and failed writes are logged; neither is surfaced.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`store`]: Storage abstraction, persistence and the recipe store
//! - [`model`]: `Recipe` and the raw `RecipePayload`
//! - [`query`]: Filtered, sorted view of the collection
//! - [`session`]: The add/edit form state machine
//! - [`validation`]: Form validation rules
//! - [`normalize`]: List text canonicalization
//! - [`id`]: Record identifiers
//! - [`confirm`]: Confirmation prompts
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod id;
pub mod model;
pub mod normalize;
pub mod query;
pub mod session;
pub mod store;
pub mod validation;
