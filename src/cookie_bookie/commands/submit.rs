use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipePayload;
use crate::session::{EditSession, Submission};
use crate::store::{RecipeStore, StorageBackend};

/// Submit the recipe form: adds when idle, updates the selected record when editing.
///
/// A validation failure is returned as an error and changes nothing.
pub fn run<B: StorageBackend>(
    store: &mut RecipeStore<B>,
    session: &mut EditSession,
    payload: &RecipePayload,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match session.submit(store, payload)? {
        Submission::Added(recipe) => {
            result.add_message(CmdMessage::success("Recipe added"));
            result.affected_recipes.push(recipe);
        }
        Submission::Updated(recipe) => {
            result.add_message(CmdMessage::success("Recipe updated"));
            result.affected_recipes.push(recipe);
        }
        Submission::Stale(_) => {}
    }
    Ok(result)
}
