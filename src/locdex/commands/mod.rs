use crate::config::LocdexConfig;
use crate::error::{LocdexError, Result};
use crate::filter::filter;
use crate::index::DisplayLocation;
use crate::locations::LocationStore;
use crate::model::{Counts, Location};
use crate::selection::{Selection, SelectionState};
use crate::storage::Storage;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod remove;
pub mod search;
pub mod select;
pub mod status;
pub mod update;

pub use update::LocationUpdate;

#[derive(Debug, Clone)]
pub struct LocdexPaths {
    pub data_dir: PathBuf,
}

/// Everything a front end mutates during a session: the record store, the
/// selection and the current query. Built once at startup and passed to
/// every command.
pub struct Session<S: Storage> {
    pub store: LocationStore<S>,
    pub selection: Selection,
    query: String,
}

impl<S: Storage> Session<S> {
    pub fn new(store: LocationStore<S>) -> Self {
        Self {
            store,
            selection: Selection::new(),
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The rows the current query lets through, in store order.
    pub fn visible(&self) -> Vec<&Location> {
        filter(self.store.list(), &self.query)
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.aggregate_state(&self.visible())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the front end. Nothing here is rendered yet.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_locations: Vec<Location>,
    pub listed_locations: Vec<DisplayLocation>,
    pub counts: Option<Counts>,
    pub selection_state: Option<SelectionState>,
    pub selected_count: usize,
    pub export: Option<String>,
    pub config: Option<LocdexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_locations(mut self, locations: Vec<Location>) -> Self {
        self.affected_locations = locations;
        self
    }

    pub fn with_listed_locations(mut self, locations: Vec<DisplayLocation>) -> Self {
        self.listed_locations = locations;
        self
    }

    pub fn with_export(mut self, text: String) -> Self {
        self.export = Some(text);
        self
    }

    pub fn with_config(mut self, config: LocdexConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Attach the counters and the selection summary for the current view.
    pub fn with_summary<S: Storage>(mut self, session: &Session<S>) -> Self {
        self.counts = Some(session.store.counts());
        self.selection_state = Some(session.selection_state());
        self.selected_count = session.selection.len();
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// Turn a user-level error into an error message. Anything else is
    /// handed back to the caller.
    pub fn recover(mut self, err: LocdexError) -> Result<Self> {
        if err.is_user_error() {
            tracing::debug!(error = %err, "user action rejected");
            self.add_message(CmdMessage::error(err.to_string()));
            Ok(self)
        } else {
            Err(err)
        }
    }
}

/// Pluralized "location" for messages.
pub(crate) fn locations_noun(n: usize) -> &'static str {
    if n == 1 {
        "location"
    } else {
        "locations"
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Session;
    use crate::locations::LocationStore;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::DEFAULT_STORAGE_KEY;
    use uuid::Uuid;

    pub fn seeded_session() -> Session<MemoryStorage> {
        let store = LocationStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY).unwrap();
        Session::new(store)
    }

    pub fn id_of(session: &Session<MemoryStorage>, name: &str) -> Uuid {
        session
            .store
            .list()
            .iter()
            .find(|l| l.name == name)
            .unwrap()
            .id
    }
}
