//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every front end.
//!
//! The facade:
//! - **Owns the session** (store, selection, query) for its whole lifetime
//! - **Normalizes inputs**: user selectors (`2`, a UUID, `"chicago"`) become ids
//! - **Dispatches** to `commands/*.rs` and returns `Result<CmdResult>`
//!
//! It does no I/O and no formatting. User mistakes (blank name, empty
//! selection) come back as error messages inside an `Ok(CmdResult)`;
//! selectors that cannot be resolved come back as `Err`.
//!
//! ## Generic Over Storage
//!
//! `LocdexApi<S: Storage>`:
//! - Production: `LocdexApi<FileStorage>`
//! - Testing: `LocdexApi<MemoryStorage>`

use crate::commands;
use crate::config::LocdexConfig;
use crate::error::{LocdexError, Result};
use crate::index::LocationSelector;
use crate::locations::LocationStore;
use crate::model::{Location, LocationFields};
use crate::storage::Storage;
use std::str::FromStr;
use uuid::Uuid;

/// The main API facade for locdex operations.
pub struct LocdexApi<S: Storage> {
    session: Session<S>,
    paths: commands::LocdexPaths,
}

impl<S: Storage> LocdexApi<S> {
    pub fn new(session: Session<S>, paths: commands::LocdexPaths) -> Self {
        Self { session, paths }
    }

    /// Open the store under the configured key and start an empty session.
    pub fn open(storage: S, config: &LocdexConfig, paths: commands::LocdexPaths) -> Result<Self> {
        let store = LocationStore::open(storage, config.storage_key.clone())?;
        Ok(Self::new(Session::new(store), paths))
    }

    pub fn create_location(&mut self, fields: LocationFields) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.session, fields)
    }

    pub fn update_location(
        &mut self,
        selector: &str,
        fields: LocationFields,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve_one(selector)?;
        commands::update::run(&mut self.session, commands::LocationUpdate::new(id, fields))
    }

    pub fn enable_locations<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve_ids(selectors)?;
        commands::status::set(&mut self.session, &ids, true)
    }

    pub fn disable_locations<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let ids = self.resolve_ids(selectors)?;
        commands::status::set(&mut self.session, &ids, false)
    }

    /// Enable or disable everything currently selected.
    pub fn bulk_set_status(&mut self, enabled: bool) -> Result<commands::CmdResult> {
        commands::status::bulk(&mut self.session, enabled)
    }

    pub fn remove_locations<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve_ids(selectors)?;
        commands::remove::run(&mut self.session, &ids)
    }

    pub fn select<I: AsRef<str>>(&mut self, selectors: &[I], value: bool) -> Result<commands::CmdResult> {
        let ids = self.resolve_ids(selectors)?;
        commands::select::toggle(&mut self.session, &ids, value)
    }

    pub fn select_all_visible(&mut self, value: bool) -> Result<commands::CmdResult> {
        commands::select::all_visible(&mut self.session, value)
    }

    pub fn clear_selection(&mut self) -> Result<commands::CmdResult> {
        commands::select::clear(&mut self.session)
    }

    pub fn list_locations(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn search(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.session, query)
    }

    pub fn export_locations(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.session)
    }

    pub fn import_locations(&mut self, json: &str) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.session, json)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Look locations up without changing anything, e.g. to confirm a removal.
    pub fn get_locations<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<Location>> {
        let ids = self.resolve_ids(selectors)?;
        Ok(ids
            .iter()
            .filter_map(|id| self.session.store.get(id).cloned())
            .collect())
    }

    pub fn get_location(&self, selector: &str) -> Result<Location> {
        let id = self.resolve_one(selector)?;
        self.session
            .store
            .get(&id)
            .cloned()
            .ok_or(LocdexError::NotFound(id))
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn resolve_ids<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<Uuid>> {
        let selectors = parse_selectors(inputs)?;
        commands::helpers::resolve_selectors(&self.session, &selectors)
    }

    fn resolve_one(&self, input: &str) -> Result<Uuid> {
        self.resolve_ids(&[input])?
            .into_iter()
            .next()
            .ok_or_else(|| LocdexError::Api(format!("Nothing matches {}", input)))
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<LocationSelector>> {
    if inputs.is_empty() {
        return Err(LocdexError::Api("No locations given".to_string()));
    }
    inputs
        .iter()
        .map(|s| LocationSelector::from_str(s.as_ref()).map_err(LocdexError::Api))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, LocdexPaths, MessageLevel, Session};
