use super::backend::StorageBackend;
use super::persistence::Persistence;
use crate::confirm::Confirm;
use crate::model::{Recipe, RecipePayload};
use crate::normalize::normalize;
use chrono::Utc;
use log::{debug, warn};

/// Sample recipes appended by [`RecipeStore::seed_demo_data`]: (title, ingredients, steps).
const DEMO_RECIPES: &[(&str, &str, &str)] = &[
    (
        "Chewy Choco Chip Cookies",
        "All-purpose flour\nBrown sugar\nButter\nChocolate chips\nBaking soda\nEggs\nVanilla\nSalt",
        "Cream butter & sugar\nAdd eggs & vanilla\nFold in dry mix\nStir in chips\nScoop & bake at 175°C for 10–12 min",
    ),
    (
        "Oatmeal Raisin Cookies",
        "Rolled oats\nFlour\nButter\nBrown sugar\nCinnamon\nEgg\nRaisins\nBaking powder\nSalt",
        "Whisk dry\nCream wet\nCombine & fold raisins\nChill 20 min\nBake at 180°C for 12–14 min",
    ),
];

/// Result of [`RecipeStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// No recipe had that id; nothing was asked or changed.
    NotFound,
    /// The user declined; nothing changed.
    Declined,
    Removed(Recipe),
}

/// The authoritative in-memory recipe collection.
///
/// Records are kept in insertion order. Every mutation is written through to
/// [`Persistence`] before the method returns; a failed write is logged and the
/// in-memory collection stays as mutated.
pub struct RecipeStore<B: StorageBackend> {
    recipes: Vec<Recipe>,
    persistence: Persistence<B>,
}

impl<B: StorageBackend> RecipeStore<B> {
    /// Open a store, reading whatever the persistence layer currently holds.
    pub fn open(persistence: Persistence<B>) -> Self {
        let recipes = persistence.load();
        Self {
            recipes,
            persistence,
        }
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    /// All records, in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Append a new recipe built from `payload`. The payload is assumed valid.
    pub fn add(&mut self, payload: &RecipePayload) -> Recipe {
        let recipe = Recipe::new(
            payload.title.trim().to_string(),
            payload.image_url(),
            normalize(&payload.ingredients),
            normalize(&payload.steps),
        );
        self.recipes.push(recipe.clone());
        debug!("added recipe {} ({})", recipe.id, recipe.title);
        self.persist();
        recipe
    }

    /// Replace the editable fields of an existing recipe.
    ///
    /// Returns `None` without touching anything if `id` is unknown.
    pub fn update(&mut self, id: &str, payload: &RecipePayload) -> Option<Recipe> {
        let recipe = self.recipes.iter_mut().find(|r| r.id == id)?;
        recipe.title = payload.title.trim().to_string();
        recipe.image = payload.image_url();
        recipe.ingredients = normalize(&payload.ingredients);
        recipe.steps = normalize(&payload.steps);
        // Clock skew must never move updated_at backwards
        recipe.updated_at = Utc::now().max(recipe.updated_at);
        let updated = recipe.clone();
        debug!("updated recipe {}", updated.id);
        self.persist();
        Some(updated)
    }

    /// Delete a recipe after asking `confirm`.
    pub fn remove<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> Removal {
        let Some(pos) = self.recipes.iter().position(|r| r.id == id) else {
            return Removal::NotFound;
        };
        let prompt = format!(
            "Delete \"{}\"? This cannot be undone.",
            self.recipes[pos].title
        );
        if !confirm.confirm(&prompt) {
            return Removal::Declined;
        }
        let removed = self.recipes.remove(pos);
        debug!("removed recipe {}", removed.id);
        self.persist();
        Removal::Removed(removed)
    }

    /// Empty the collection after asking `confirm`. Returns whether anything was cleared.
    pub fn clear_all<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> bool {
        if !confirm.confirm("Clear ALL recipes? This cannot be undone.") {
            return false;
        }
        self.recipes.clear();
        debug!("cleared all recipes");
        self.persist();
        true
    }

    /// Append the built-in sample recipes and return them.
    pub fn seed_demo_data(&mut self) -> Vec<Recipe> {
        let demo: Vec<Recipe> = DEMO_RECIPES
            .iter()
            .map(|(title, ingredients, steps)| {
                Recipe::new(
                    title.to_string(),
                    None,
                    normalize(ingredients),
                    normalize(steps),
                )
            })
            .collect();
        self.recipes.extend(demo.iter().cloned());
        debug!("seeded {} demo recipes", demo.len());
        self.persist();
        demo
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.recipes) {
            warn!("failed to save recipes: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::{AssumeNo, AssumeYes};
    use crate::store::mem_backend::MemBackend;

    fn store() -> RecipeStore<MemBackend> {
        RecipeStore::open(Persistence::new(MemBackend::new()))
    }

    fn payload(title: &str) -> RecipePayload {
        RecipePayload::new(title, "", "Flour, Sugar\nButter", "Mix\n\nBake ")
    }

    fn writes(store: &RecipeStore<MemBackend>) -> usize {
        store.persistence().backend().write_count()
    }

    #[test]
    fn add_normalizes_and_is_findable() {
        let mut store = store();
        let added = store.add(&RecipePayload::new(
            "  Shortbread ",
            " https://x.com/s.png ",
            "Butter, Sugar, Flour",
            "Mix\nChill\n",
        ));

        let found = store.find_by_id(&added.id).unwrap();
        assert_eq!(found.title, "Shortbread");
        assert_eq!(found.image.as_deref(), Some("https://x.com/s.png"));
        assert_eq!(found.ingredients, "Butter\nSugar\nFlour");
        assert_eq!(found.steps, "Mix\nChill");
        assert_eq!(found.created_at, found.updated_at);
        assert_eq!(writes(&store), 1);
    }

    #[test]
    fn add_persists_the_collection() {
        let mut store = store();
        store.add(&payload("Macarons"));
        store.add(&payload("Madeleines"));

        let reloaded = store.persistence().load();
        assert_eq!(reloaded, store.recipes());
    }

    #[test]
    fn update_preserves_identity() {
        let mut store = store();
        let original = store.add(&payload("Gingerbread"));

        let updated = store
            .update(
                &original.id,
                &RecipePayload::new("Gingerbread Men", "", "Ginger", "Cut\nBake"),
            )
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.title, "Gingerbread Men");
        assert_eq!(updated.steps, "Cut\nBake");
        assert_eq!(store.find_by_id(&original.id), Some(&updated));
        assert_eq!(writes(&store), 2);
    }

    #[test]
    fn update_can_clear_the_image() {
        let mut store = store();
        let original = store.add(&RecipePayload::new(
            "Tuiles",
            "https://x.com/t.png",
            "Egg whites",
            "Bake",
        ));
        let updated = store
            .update(&original.id, &RecipePayload::new("Tuiles", "", "Egg whites", "Bake"))
            .unwrap();
        assert_eq!(updated.image, None);
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut store = store();
        store.add(&payload("Florentines"));
        let before = store.recipes().to_vec();

        assert!(store.update("missing", &payload("Other")).is_none());
        assert_eq!(store.recipes(), before.as_slice());
        assert_eq!(writes(&store), 1);
    }

    #[test]
    fn remove_requires_confirmation() {
        let mut store = store();
        let recipe = store.add(&payload("Palmiers"));

        assert_eq!(store.remove(&recipe.id, &mut AssumeNo), Removal::Declined);
        assert_eq!(store.len(), 1);
        assert_eq!(writes(&store), 1);

        assert_eq!(
            store.remove(&recipe.id, &mut AssumeYes),
            Removal::Removed(recipe.clone())
        );
        assert!(store.is_empty());
        assert_eq!(writes(&store), 2);
    }

    #[test]
    fn remove_prompts_with_the_title() {
        let mut store = store();
        let recipe = store.add(&payload("Amaretti"));
        let mut prompts = Vec::new();
        store.remove(&recipe.id, &mut |p: &str| {
            prompts.push(p.to_string());
            false
        });
        assert_eq!(prompts, vec!["Delete \"Amaretti\"? This cannot be undone."]);
    }

    #[test]
    fn remove_of_unknown_id_never_asks() {
        let mut store = store();
        let mut asked = false;
        let outcome = store.remove("missing", &mut |_: &str| {
            asked = true;
            true
        });
        assert_eq!(outcome, Removal::NotFound);
        assert!(!asked);
        assert_eq!(writes(&store), 0);
    }

    #[test]
    fn clear_all_respects_confirmation() {
        let mut store = store();
        store.add(&payload("Speculoos"));
        store.add(&payload("Pizzelle"));

        assert!(!store.clear_all(&mut AssumeNo));
        assert_eq!(store.len(), 2);
        assert_eq!(writes(&store), 2);

        assert!(store.clear_all(&mut AssumeYes));
        assert!(store.is_empty());
        assert!(store.persistence().load().is_empty());
    }

    #[test]
    fn seed_appends_demo_recipes() {
        let mut store = store();
        store.add(&payload("Existing"));
        let seeded = store.seed_demo_data();

        assert_eq!(seeded.len(), 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.recipes()[0].title, "Existing");
        assert_eq!(store.recipes()[1].title, "Chewy Choco Chip Cookies");
        assert_eq!(store.recipes()[2].title, "Oatmeal Raisin Cookies");
        assert!(store.recipes()[1].ingredients.starts_with("All-purpose flour\nBrown sugar"));
        assert_eq!(store.persistence().load().len(), 3);
    }

    #[test]
    fn failed_saves_keep_memory_state() {
        let mut store = store();
        store.persistence().backend().set_simulate_write_error(true);
        let recipe = store.add(&payload("Linzer"));
        assert_eq!(store.find_by_id(&recipe.id), Some(&recipe));
        assert_eq!(writes(&store), 0);
    }

    #[test]
    fn open_reads_existing_data() {
        let mut first = store();
        first.add(&payload("Rugelach"));
        let raw = first
            .persistence()
            .backend()
            .value(crate::store::persistence::DEFAULT_STORAGE_KEY)
            .unwrap();

        let backend =
            MemBackend::new().with_value(crate::store::persistence::DEFAULT_STORAGE_KEY, &raw);
        let second = RecipeStore::open(Persistence::new(backend));
        assert_eq!(second.recipes(), first.recipes());
    }
}
