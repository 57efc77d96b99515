use super::Storage;
use crate::error::{LocdexError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed storage: every key is one JSON file in `root`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`. Characters that are unsafe in file
    /// names become underscores, so `locations:v1` maps to `locations_v1.json`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.json", safe))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LocdexError::Io)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LocdexError::Io(e)),
        }
    }

    fn save(&mut self, key: &str, contents: &str) -> Result<()> {
        self.ensure_root()?;
        let path = self.key_path(key);
        // Write next to the target and rename so a crash never leaves half a snapshot.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(LocdexError::Io)?;
        fs::rename(&tmp, &path).map_err(LocdexError::Io)?;
        Ok(())
    }
}
