//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI clients.
//! It owns the three pieces of session state: the [`RecipeStore`], the form's
//! [`EditSession`] and the current search query.
//!
//! Every mutating call returns a [`CmdResult`] whose `listed_recipes` is the freshly
//! recomputed view for the current query, so the caller can re-render straight away,
//! and whose `messages` carry the notification to show ("Recipe added", ...).
//!
//! Generic over [`StorageBackend`]:
//! - Production: `BookieApi<FsBackend>`
//! - Testing: `BookieApi<MemBackend>`

use crate::commands;
use crate::confirm::Confirm;
use crate::error::Result;
use crate::model::RecipePayload;
use crate::query::view;
use crate::session::EditSession;
use crate::store::{RecipeStore, StorageBackend};
use std::path::PathBuf;

pub struct BookieApi<B: StorageBackend> {
    store: RecipeStore<B>,
    session: EditSession,
    query: String,
    config_dir: PathBuf,
}

impl<B: StorageBackend> BookieApi<B> {
    pub fn new(store: RecipeStore<B>, config_dir: PathBuf) -> Self {
        Self {
            store,
            session: EditSession::new(),
            query: String::new(),
            config_dir,
        }
    }

    pub fn store(&self) -> &RecipeStore<B> {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Submit the form: add when idle, update the selected recipe when editing.
    pub fn submit(&mut self, payload: &RecipePayload) -> Result<CmdResult> {
        let result = commands::submit::run(&mut self.store, &mut self.session, payload)?;
        Ok(self.rerender(result))
    }

    pub fn begin_edit(&mut self, id: &str) -> CmdResult {
        commands::edit::begin(&self.store, &mut self.session, id)
    }

    pub fn cancel_edit(&mut self) -> CmdResult {
        commands::edit::cancel(&mut self.session)
    }

    pub fn delete<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> CmdResult {
        let result = commands::delete::run(&mut self.store, &mut self.session, id, confirm);
        self.rerender(result)
    }

    pub fn clear_all<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> CmdResult {
        let result = commands::clear::run(&mut self.store, &mut self.session, confirm);
        self.rerender(result)
    }

    pub fn seed(&mut self) -> CmdResult {
        let result = commands::seed::run(&mut self.store);
        self.rerender(result)
    }

    /// Set the search query and return the matching view.
    pub fn search(&mut self, query: &str) -> CmdResult {
        self.query = query.to_string();
        self.list()
    }

    pub fn clear_search(&mut self) -> CmdResult {
        self.search("")
    }

    /// The view for the current query.
    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.store, &self.query)
    }

    pub fn show(&self, id: &str) -> CmdResult {
        commands::list::show(&self.store, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn rerender(&self, mut result: CmdResult) -> CmdResult {
        result.listed_recipes = view(&self.query, self.store.recipes())
            .into_iter()
            .cloned()
            .collect();
        result
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
