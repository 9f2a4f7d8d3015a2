use crate::commands::{CmdMessage, CmdResult};
use crate::query::{count_label, view};
use crate::store::{RecipeStore, StorageBackend};

/// The current view for `query`, with its count label as an info message.
pub fn run<B: StorageBackend>(store: &RecipeStore<B>, query: &str) -> CmdResult {
    let listed: Vec<_> = view(query, store.recipes()).into_iter().cloned().collect();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(count_label(listed.len())));
    result.with_listed_recipes(listed)
}

/// A single record by id. Unknown ids return an empty listing.
pub fn show<B: StorageBackend>(store: &RecipeStore<B>, id: &str) -> CmdResult {
    let listed = store.find_by_id(id).cloned().into_iter().collect();
    CmdResult::default().with_listed_recipes(listed)
}
