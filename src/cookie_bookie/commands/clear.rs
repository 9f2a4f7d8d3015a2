use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::Confirm;
use crate::session::EditSession;
use crate::store::{RecipeStore, StorageBackend};

pub fn run<B: StorageBackend, C: Confirm + ?Sized>(
    store: &mut RecipeStore<B>,
    session: &mut EditSession,
    confirm: &mut C,
) -> CmdResult {
    let mut result = CmdResult::default();
    let removed = store.recipes().to_vec();
    if store.clear_all(confirm) {
        session.cancel();
        result.add_message(CmdMessage::success("All recipes cleared"));
        result.affected_recipes = removed;
    } else {
        result.add_message(CmdMessage::info("Operation cancelled."));
    }
    result
}
