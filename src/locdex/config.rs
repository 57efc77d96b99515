use crate::error::{LocdexError, Result};
use crate::storage::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "locations.json";

pub const CONFIG_KEYS: [&str; 2] = ["storage-key", "export-file"];

/// Configuration for locdex, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocdexConfig {
    /// Key the snapshot is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File name written by `export`
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for LocdexConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            export_file: default_export_file(),
        }
    }
}

impl LocdexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LocdexError::Io)?;
        let config: LocdexConfig =
            serde_json::from_str(&content).map_err(LocdexError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LocdexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LocdexError::Serialization)?;
        fs::write(config_path, content).map_err(LocdexError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "export-file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("{} cannot be empty", key));
        }
        match key {
            "storage-key" => self.storage_key = value.to_string(),
            "export-file" => self.export_file = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
