//! The recipe form's edit session.
//!
//! The form is either adding a new recipe ([`EditState::Idle`]) or editing an existing one
//! ([`EditState::Editing`]). Submitting while idle adds; submitting while editing updates the
//! selected record and returns to idle. Cancelling, or deleting the record being edited,
//! also returns to idle.

use crate::model::{Recipe, RecipePayload};
use crate::store::{RecipeStore, StorageBackend};
use crate::validation::{validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(String),
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(Recipe),
    Updated(Recipe),
    /// The record being edited was gone by the time the form was submitted.
    Stale(String),
}

#[derive(Debug, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    /// Start editing `id`, returning its fields for the form.
    ///
    /// Unknown ids leave the session as it was.
    pub fn begin_edit<B: StorageBackend>(
        &mut self,
        store: &RecipeStore<B>,
        id: &str,
    ) -> Option<RecipePayload> {
        let recipe = store.find_by_id(id)?;
        self.state = EditState::Editing(recipe.id.clone());
        Some(RecipePayload::from(recipe))
    }

    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }

    /// Validate `payload` and apply it to the store.
    ///
    /// On a validation error nothing changes, including the session state.
    pub fn submit<B: StorageBackend>(
        &mut self,
        store: &mut RecipeStore<B>,
        payload: &RecipePayload,
    ) -> Result<Submission, ValidationError> {
        validate(payload)?;

        let submission = match std::mem::take(&mut self.state) {
            EditState::Idle => Submission::Added(store.add(payload)),
            EditState::Editing(id) => match store.update(&id, payload) {
                Some(recipe) => Submission::Updated(recipe),
                None => Submission::Stale(id),
            },
        };
        Ok(submission)
    }

    /// Called after a record is deleted; drops out of editing if it was the one selected.
    pub fn on_removed(&mut self, id: &str) {
        if self.editing_id() == Some(id) {
            self.state = EditState::Idle;
        }
    }

    pub fn form_title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Recipe"
        } else {
            "Add New Recipe"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Recipe"
        } else {
            "Add Recipe"
        }
    }

    pub fn status(&self) -> &'static str {
        if self.is_editing() {
            "Editing…"
        } else {
            ""
        }
    }
}
