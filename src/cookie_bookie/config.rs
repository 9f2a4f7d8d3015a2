use crate::error::{BookieError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookieConfig {
    /// Key the recipe collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Pretty-print the stored JSON
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_pretty_json() -> bool {
    true
}

impl Default for BookieConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            pretty_json: default_pretty_json(),
        }
    }
}

impl BookieConfig {
    pub const KEYS: &'static [&'static str] = &["storage-key", "pretty-json"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookieError::Io)?;
        let config: BookieConfig =
            serde_json::from_str(&content).map_err(BookieError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookieError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookieError::Serialization)?;
        fs::write(config_path, content).map_err(BookieError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "pretty-json" => Some(self.pretty_json.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty()
                    || value.starts_with('.')
                    || value.contains(['/', '\\'])
                {
                    return Err(format!("Invalid storage key: {}", value));
                }
                self.storage_key = value.to_string();
                Ok(())
            }
            "pretty-json" => {
                self.pretty_json = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("Expected true or false, got: {}", other)),
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
