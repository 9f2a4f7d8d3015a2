use crate::id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored recipe.
///
/// Field names are camelCase on disk so an existing browser export loads as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    // Absent images are written as "" and read back as None
    #[serde(default, with = "blank_as_none")]
    pub image: Option<String>,
    pub ingredients: String,
    pub steps: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds a fresh record with a new id and both timestamps set to now.
    ///
    /// Fields are taken as given; callers normalize them first.
    pub fn new(title: String, image: Option<String>, ingredients: String, steps: String) -> Self {
        let now = Utc::now();
        Self {
            id: id::generate(),
            title,
            image,
            ingredients,
            steps,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Raw form input for a recipe, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePayload {
    pub title: String,
    pub image: String,
    pub ingredients: String,
    pub steps: String,
}

impl RecipePayload {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
        }
    }

    /// The trimmed image URL, or `None` when the field was left blank.
    pub fn image_url(&self) -> Option<String> {
        let trimmed = self.image.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl From<&Recipe> for RecipePayload {
    /// Loads a stored record back into form fields (used when editing).
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            image: recipe.image.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
        }
    }
}

mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.trim().is_empty()))
    }
}
