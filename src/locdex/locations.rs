//! # Record Store
//!
//! [`LocationStore`] owns the authoritative, ordered collection of locations.
//! Display order is store order and new locations go to the front.
//!
//! Every mutating call writes exactly one full snapshot through the
//! [`Storage`] it was opened with. Writes are best-effort (see
//! [`crate::storage::save_snapshot`]), so mutations never fail because of
//! persistence.
//!
//! The store knows nothing about selection; removing a location from the
//! selection as well is the job of the `remove` command.

use crate::error::{LocdexError, Result};
use crate::model::{Counts, Location, LocationFields};
use crate::seed::seed_locations;
use crate::storage::{load_snapshot, save_snapshot, Storage};
use std::collections::HashSet;
use uuid::Uuid;

pub struct LocationStore<S: Storage> {
    storage: S,
    key: String,
    locations: Vec<Location>,
}

impl<S: Storage> LocationStore<S> {
    /// Load the snapshot under `key`, or prime the store with the seed list
    /// (and persist it) when there is no usable snapshot. A snapshot that
    /// needed repairs is written back once, so repaired ids stay stable.
    pub fn open(storage: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let snapshot = load_snapshot(&storage, &key);
        match snapshot {
            Some(snapshot) => {
                let read = snapshot.locations.len();
                let mut store = Self {
                    locations: sanitize(snapshot.locations),
                    storage,
                    key,
                };
                if snapshot.repaired > 0 || store.locations.len() != read {
                    tracing::info!(key = %store.key, "writing back repaired snapshot");
                    store.persist();
                }
                Ok(store)
            }
            None => {
                tracing::info!(key = %key, "no usable snapshot, loading seed locations");
                let mut store = Self {
                    locations: seed_locations()?,
                    storage,
                    key,
                };
                store.persist();
                Ok(store)
            }
        }
    }

    pub fn list(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, id: &Uuid) -> Option<&Location> {
        self.locations.iter().find(|l| &l.id == id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn counts(&self) -> Counts {
        Counts::of(&self.locations)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn create(&mut self, fields: LocationFields) -> Result<Location> {
        let fields = fields.trimmed();
        if fields.name.is_empty() {
            return Err(LocdexError::validation("Name is required."));
        }

        let location = Location::new(fields, true);
        tracing::debug!(id = %location.id, name = %location.name, "creating location");
        self.locations.insert(0, location.clone());
        self.persist();
        Ok(location)
    }

    pub fn update(&mut self, id: &Uuid, fields: LocationFields) -> Result<Location> {
        let fields = fields.trimmed();
        let location = self.find_mut(id).ok_or(LocdexError::NotFound(*id))?;
        if fields.name.is_empty() {
            return Err(LocdexError::validation("Name cannot be empty."));
        }

        location.apply(fields);
        let updated = location.clone();
        tracing::debug!(id = %id, name = %updated.name, "updated location");
        self.persist();
        Ok(updated)
    }

    /// Set one location's status. An unknown id is a silent no-op: nothing is
    /// written and `None` is returned.
    pub fn set_status(&mut self, id: &Uuid, enabled: bool) -> Option<Location> {
        let location = self.find_mut(id)?;
        location.status = enabled;
        let updated = location.clone();
        tracing::debug!(id = %id, enabled, "set status");
        self.persist();
        Some(updated)
    }

    /// Remove a location, returning it. Removing an unknown id is not an
    /// error and returns `None`.
    pub fn remove(&mut self, id: &Uuid) -> Option<Location> {
        let pos = self.locations.iter().position(|l| &l.id == id);
        let removed = pos.map(|pos| self.locations.remove(pos));
        match &removed {
            Some(loc) => tracing::debug!(id = %id, name = %loc.name, "removed location"),
            None => tracing::debug!(id = %id, "remove of unknown id ignored"),
        }
        self.persist();
        removed
    }

    /// Set the status of every listed location that exists, with one write.
    /// Returns how many locations matched.
    pub fn bulk_set_status(&mut self, ids: &HashSet<Uuid>, enabled: bool) -> Result<usize> {
        if ids.is_empty() {
            return Err(LocdexError::validation("Select at least one item first."));
        }

        let mut matched = 0;
        for location in self.locations.iter_mut().filter(|l| ids.contains(&l.id)) {
            location.status = enabled;
            matched += 1;
        }
        tracing::debug!(requested = ids.len(), matched, enabled, "bulk status change");
        self.persist();
        Ok(matched)
    }

    /// Put a batch at the front of the store, keeping the batch's own order,
    /// with a single write. Entries with a blank name are rejected as a whole.
    pub fn insert_many(&mut self, batch: Vec<Location>) -> Result<usize> {
        if let Some(bad) = batch.iter().find(|l| l.name.trim().is_empty()) {
            return Err(LocdexError::validation(format!(
                "Location {} has no name.",
                bad.id
            )));
        }

        let count = batch.len();
        let rest = std::mem::take(&mut self.locations);
        self.locations = batch.into_iter().chain(rest).collect();
        self.locations = sanitize(std::mem::take(&mut self.locations));
        tracing::debug!(count, "inserted batch");
        self.persist();
        Ok(count)
    }

    fn find_mut(&mut self, id: &Uuid) -> Option<&mut Location> {
        self.locations.iter_mut().find(|l| &l.id == id)
    }

    fn persist(&mut self) {
        save_snapshot(&mut self.storage, &self.key, &self.locations);
    }
}

/// Enforce the store invariants on data coming from outside: non-empty names
/// and unique ids (first occurrence wins).
fn sanitize(locations: Vec<Location>) -> Vec<Location> {
    let mut seen = HashSet::new();
    locations
        .into_iter()
        .filter(|loc| {
            if loc.name.trim().is_empty() {
                tracing::warn!(id = %loc.id, "dropping location with blank name");
                return false;
            }
            if !seen.insert(loc.id) {
                tracing::warn!(id = %loc.id, "dropping location with duplicate id");
                return false;
            }
            true
        })
        .collect()
}
