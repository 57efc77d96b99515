use super::Storage;
use crate::error::{LocdexError, Result};
use std::collections::HashMap;

/// In-memory storage for tests and throwaway sessions.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as if a previous session had written it.
    pub fn with_entry(mut self, key: &str, contents: &str) -> Self {
        self.entries.insert(key.to_string(), contents.to_string());
        self
    }

    /// Make every write fail, like a browser store that is over quota.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_failing_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(LocdexError::Store(format!("write to {} rejected", key)));
        }
        self.entries.insert(key.to_string(), contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::locations::LocationStore;
    use crate::model::{Location, LocationFields};
    use crate::storage::DEFAULT_STORAGE_KEY;

    /// Builds a snapshot in memory before the store is opened.
    #[derive(Default)]
    pub struct StoreFixture {
        locations: Vec<Location>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_location(mut self, name: &str, state: &str, enabled: bool) -> Self {
            let fields = LocationFields::new(name).with_state(state);
            self.locations.push(Location::new(fields, enabled));
            self
        }

        pub fn with_locations(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = LocationFields::new(format!("Location {}", i + 1))
                    .with_city(format!("City {}", i + 1));
                self.locations.push(Location::new(fields, true));
            }
            self
        }

        pub fn storage(&self) -> MemoryStorage {
            let json = serde_json::to_string(&self.locations).unwrap();
            MemoryStorage::new().with_entry(DEFAULT_STORAGE_KEY, &json)
        }

        pub fn open(self) -> LocationStore<MemoryStorage> {
            LocationStore::open(self.storage(), DEFAULT_STORAGE_KEY).unwrap()
        }
    }
}
