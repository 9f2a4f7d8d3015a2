use super::backend::StorageBackend;
use crate::error::{BookieError, Result};
use crate::model::Recipe;
use log::{debug, warn};

/// Key the recipe collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cookieBookieRecipes.v1";

/// Reads and writes the whole recipe collection as one JSON array under a fixed key.
///
/// This is the only component that touches durable storage. Loading never fails:
/// a missing, unparseable or non-array value is treated as an empty collection, and
/// malformed records inside an array are skipped.
pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
    pretty: bool,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
            pretty: true,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the stored collection with `recipes`.
    pub fn save(&self, recipes: &[Recipe]) -> Result<()> {
        let content = if self.pretty {
            serde_json::to_string_pretty(recipes)
        } else {
            serde_json::to_string(recipes)
        }
        .map_err(BookieError::Serialization)?;
        self.backend.write(&self.key, &content)?;
        debug!("saved {} recipes under {}", recipes.len(), self.key);
        Ok(())
    }

    /// Read the stored collection, recovering from anything unreadable with an empty one.
    pub fn load(&self) -> Vec<Recipe> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("could not read {}: {}", self.key, e);
                return Vec::new();
            }
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("ignoring unparseable data under {}: {}", self.key, e);
                return Vec::new();
            }
        };
        let Some(items) = value.as_array() else {
            warn!("ignoring non-array data under {}", self.key);
            return Vec::new();
        };

        // Each record decodes on its own; malformed ones are dropped.
        let recipes: Vec<Recipe> = items
            .iter()
            .filter_map(|item| serde_json::from_value::<Recipe>(item.clone()).ok())
            .collect();
        let skipped = items.len() - recipes.len();
        if skipped > 0 {
            warn!("skipped {} malformed recipes under {}", skipped, self.key);
        }
        debug!("loaded {} recipes from {}", recipes.len(), self.key);
        recipes
    }
}
