use crate::config::BookieConfig;
use crate::model::{Recipe, RecipePayload};

pub mod clear;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod seed;
pub mod submit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A short notification for the user ("Recipe added", ...).
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Everything a command hands back to the presentation layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or deleted by the command
    pub affected_recipes: Vec<Recipe>,
    /// The view to render, already filtered and sorted
    pub listed_recipes: Vec<Recipe>,
    /// Form fields to display, when the command opened a record for editing
    pub form: Option<RecipePayload>,
    pub config: Option<BookieConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_form(mut self, form: RecipePayload) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_config(mut self, config: BookieConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_message(&self, content: &str) -> bool {
        self.messages.iter().any(|m| m.content == content)
    }
}
