//! # Storage Layer
//!
//! Locations are persisted as a single JSON snapshot stored under a fixed key
//! (`locations:v1` by default). The [`Storage`] trait is the key-value seam; the
//! record store never touches files directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: one file per key inside a data directory
//!   (`locations:v1` is stored as `locations_v1.json`).
//! - [`memory::MemoryStorage`]: a map in memory, used by tests and by
//!   throwaway sessions.
//!
//! ## Snapshot semantics
//!
//! [`load_snapshot`] never fails: a missing key, an unreadable file, malformed
//! JSON or a JSON value that is not an array all read as "no data" and the
//! caller falls back to the seed list. Inside a valid array every record is
//! read on its own. A record with a non-UUID id or a string `status` (as
//! written by older versions) is repaired, and a record that is not an object
//! is dropped. Both are logged and counted in [`Snapshot::repaired`], so one
//! bad record never costs the rest of the list.
//!
//! [`save_snapshot`] is best-effort: a failed write is logged and swallowed,
//! and the in-memory collection stays the source of truth until the next
//! successful write.

use crate::error::{LocdexError, Result};
use crate::model::Location;
use crate::wire::{status_flag, WireLocation};
use serde_json::Value;
use uuid::Uuid;

pub mod fs;
pub mod memory;

pub const DEFAULT_STORAGE_KEY: &str = "locations:v1";

/// Abstract key-value storage for serialized snapshots.
pub trait Storage {
    /// Read the raw value stored under `key`, `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn save(&mut self, key: &str, contents: &str) -> Result<()>;
}

/// A decoded snapshot.
#[derive(Debug, Default, PartialEq)]
pub struct Snapshot {
    pub locations: Vec<Location>,
    /// Records that were fixed up or dropped while reading.
    pub repaired: usize,
}

/// Read and decode the snapshot under `key`, or `None` when there is no
/// usable data.
pub fn load_snapshot<S: Storage + ?Sized>(storage: &S, key: &str) -> Option<Snapshot> {
    let raw = match storage.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read snapshot");
            return None;
        }
    };

    if raw.trim().is_empty() {
        return None;
    }

    match decode_snapshot(&raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable snapshot");
            None
        }
    }
}

fn decode_snapshot(raw: &str) -> Result<Snapshot> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = value else {
        return Err(LocdexError::Store("snapshot is not a JSON array".to_string()));
    };

    let mut snapshot = Snapshot::default();
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Location>(item.clone()) {
            Ok(location) => snapshot.locations.push(location),
            Err(e) => {
                snapshot.repaired += 1;
                match salvage_record(item) {
                    Some(location) => {
                        tracing::warn!(index, error = %e, "repaired snapshot record");
                        snapshot.locations.push(location);
                    }
                    None => tracing::warn!(index, error = %e, "dropping snapshot record"),
                }
            }
        }
    }
    Ok(snapshot)
}

/// Lenient read of one record: text fields as on the wire, an id that is not
/// a UUID replaced by a fresh one, `status` either a boolean or `"1"`/`"0"`.
fn salvage_record(item: Value) -> Option<Location> {
    if !item.is_object() {
        return None;
    }
    let id = item
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok());
    let status = match item.get("status") {
        Some(Value::Bool(enabled)) => *enabled,
        other => status_flag(other),
    };

    let wire: WireLocation = serde_json::from_value(item).ok()?;
    let mut location = Location::new(wire.fields(), status);
    if let Some(id) = id {
        location.id = id;
    }
    Some(location)
}

/// Encode and write the full snapshot. Failures are logged, never returned.
pub fn save_snapshot<S: Storage + ?Sized>(storage: &mut S, key: &str, locations: &[Location]) {
    let written = serde_json::to_string(locations)
        .map_err(LocdexError::Serialization)
        .and_then(|json| storage.save(key, &json));

    match written {
        Ok(()) => tracing::debug!(key, count = locations.len(), "snapshot written"),
        Err(e) => tracing::warn!(key, error = %e, "snapshot write failed; keeping in-memory state"),
    }
}
