use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::Confirm;
use crate::session::EditSession;
use crate::store::{RecipeStore, Removal, StorageBackend};

/// Delete one recipe, asking `confirm` first.
///
/// Unknown ids are ignored. Deleting the record being edited ends the edit.
pub fn run<B: StorageBackend, C: Confirm + ?Sized>(
    store: &mut RecipeStore<B>,
    session: &mut EditSession,
    id: &str,
    confirm: &mut C,
) -> CmdResult {
    let mut result = CmdResult::default();
    match store.remove(id, confirm) {
        Removal::Removed(recipe) => {
            session.on_removed(&recipe.id);
            result.add_message(CmdMessage::success("Recipe deleted"));
            result.affected_recipes.push(recipe);
        }
        Removal::Declined => result.add_message(CmdMessage::info("Operation cancelled.")),
        Removal::NotFound => {}
    }
    result
}
