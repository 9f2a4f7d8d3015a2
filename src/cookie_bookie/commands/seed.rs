use crate::commands::{CmdMessage, CmdResult};
use crate::store::{RecipeStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut RecipeStore<B>) -> CmdResult {
    let seeded = store.seed_demo_data();
    let mut result = CmdResult::default().with_affected_recipes(seeded);
    result.add_message(CmdMessage::success("Sample recipes added"));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Persistence;

    #[test]
    fn seeds_twice_without_id_clashes() {
        let mut store = RecipeStore::open(Persistence::new(MemBackend::new()));
        run(&mut store);
        let result = run(&mut store);
        assert!(result.has_message("Sample recipes added"));
        assert_eq!(store.len(), 4);

        let mut ids: Vec<_> = store.recipes().iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
