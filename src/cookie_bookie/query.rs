//! Derives the list the user sees from the stored collection.
//!
//! The view is newest-first by `updated_at` and optionally filtered by a search query.
//! It borrows from the collection and never reorders or changes it.

use crate::model::Recipe;

/// Records to display for `query`, most recently updated first.
///
/// The query is trimmed and matched case-insensitively as a substring of the title or
/// the ingredients. Steps are not searched. An empty query keeps everything. Records with
/// equal `updated_at` keep their stored relative order.
pub fn view<'a>(query: &str, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();

    let mut data: Vec<&Recipe> = recipes.iter().collect();
    // Stable sort keeps insertion order among ties
    data.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    if query.is_empty() {
        return data;
    }
    data.into_iter()
        .filter(|r| matches(r, &query))
        .collect()
}

fn matches(recipe: &Recipe, lowered_query: &str) -> bool {
    recipe.title.to_lowercase().contains(lowered_query)
        || recipe.ingredients.to_lowercase().contains(lowered_query)
}

/// "1 recipe" / "N recipes".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 recipe".to_string()
    } else {
        format!("{} recipes", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn recipe(title: &str, ingredients: &str, steps: &str, minutes: i64) -> Recipe {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut r = Recipe::new(title.into(), None, ingredients.into(), steps.into());
        r.created_at = base;
        r.updated_at = base + Duration::minutes(minutes);
        r
    }

    fn titles(view: &[&Recipe]) -> Vec<String> {
        view.iter().map(|r| r.title.clone()).collect()
    }

    fn collection() -> Vec<Recipe> {
        vec![
            recipe("Lemon Bars", "Lemons\nButter", "Bake", 5),
            recipe("Fudge", "Chocolate\nCondensed milk", "Stir", 30),
            recipe("Sugar Cookies", "Flour\nSugar", "Roll in chocolate", 10),
        ]
    }

    #[test]
    fn empty_query_sorts_newest_first() {
        let recipes = collection();
        let v = view("", &recipes);
        assert_eq!(titles(&v), vec!["Fudge", "Sugar Cookies", "Lemon Bars"]);
        // Stored order is untouched
        assert_eq!(recipes[0].title, "Lemon Bars");
    }

    #[test]
    fn whitespace_query_is_empty() {
        let recipes = collection();
        assert_eq!(view("   ", &recipes).len(), 3);
    }

    #[test]
    fn filters_on_title_case_insensitively() {
        let recipes = collection();
        assert_eq!(titles(&view("  LEMON ", &recipes)), vec!["Lemon Bars"]);
    }

    #[test]
    fn filters_on_ingredients_but_not_steps() {
        let recipes = collection();
        // "chocolate" is an ingredient of Fudge and only a step of Sugar Cookies
        assert_eq!(titles(&view("chocolate", &recipes)), vec!["Fudge"]);
        assert_eq!(titles(&view("sugar", &recipes)), vec!["Sugar Cookies"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let recipes = vec![
            recipe("First", "x", "y", 0),
            recipe("Second", "x", "y", 0),
            recipe("Third", "x", "y", 0),
        ];
        assert_eq!(titles(&view("", &recipes)), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn no_matches_yields_empty_view() {
        let recipes = collection();
        assert!(view("pistachio", &recipes).is_empty());
        assert!(view("", &[]).is_empty());
    }

    #[test]
    fn labels_counts() {
        assert_eq!(count_label(0), "0 recipes");
        assert_eq!(count_label(1), "1 recipe");
        assert_eq!(count_label(7), "7 recipes");
    }
}
