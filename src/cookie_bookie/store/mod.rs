//! # Storage Layer
//!
//! Recipes live in memory in a [`RecipeStore`] and are written through to durable storage
//! after every change.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw key-value I/O. Knows nothing about recipes.
//!   - [`fs_backend::FsBackend`]: production, one JSON file per key, atomic writes
//!   - [`mem_backend::MemBackend`]: testing, with write counting and error simulation
//! - [`persistence::Persistence`]: serializes the whole collection as a JSON array under one
//!   key and recovers from corrupt data on load.
//! - [`recipe_store::RecipeStore`]: the in-memory collection and its operations.
//!
//! ## Storage Format
//!
//! For `FsBackend` with the default key:
//! ```text
//! <data dir>/
//! ├── cookieBookieRecipes.v1.json   # JSON array of recipes
//! └── config.json                   # Optional configuration
//! ```
//!
//! The file is read once when the store opens and replaced in full after each mutation.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod persistence;
pub mod recipe_store;

pub use backend::StorageBackend;
pub use persistence::{Persistence, DEFAULT_STORAGE_KEY};
pub use recipe_store::{RecipeStore, Removal};
