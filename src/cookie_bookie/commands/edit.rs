use crate::commands::{CmdMessage, CmdResult};
use crate::session::EditSession;
use crate::store::{RecipeStore, StorageBackend};

/// Open a record in the form. Unknown ids return an empty result.
pub fn begin<B: StorageBackend>(
    store: &RecipeStore<B>,
    session: &mut EditSession,
    id: &str,
) -> CmdResult {
    match session.begin_edit(store, id) {
        Some(form) => {
            let mut result = CmdResult::default().with_form(form);
            result.add_message(CmdMessage::info(session.status()));
            result
        }
        None => CmdResult::default(),
    }
}

pub fn cancel(session: &mut EditSession) -> CmdResult {
    session.cancel();
    CmdResult::default()
}
