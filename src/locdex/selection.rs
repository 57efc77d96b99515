use crate::model::Location;
use std::collections::HashSet;
use uuid::Uuid;

/// Aggregate selection over the visible rows; drives a tri-state
/// "select all" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

/// The ids currently selected. Independent of the query: hiding a row does
/// not unselect it.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<Uuid>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: Uuid, value: bool) {
        if value {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Sets or clears exactly the given ids; others are left alone.
    pub fn set_all<I>(&mut self, ids: I, value: bool)
    where
        I: IntoIterator<Item = Uuid>,
    {
        for id in ids {
            self.toggle(id, value);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop a single id, e.g. after the record was removed.
    pub fn purge(&mut self, id: &Uuid) {
        self.ids.remove(id);
    }

    pub fn is_selected(&self, id: &Uuid) -> bool {
        self.ids.contains(id)
    }

    pub fn selected_ids(&self) -> HashSet<Uuid> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn aggregate_state(&self, visible: &[&Location]) -> SelectionState {
        let selected = visible.iter().filter(|l| self.is_selected(&l.id)).count();
        if selected == 0 {
            SelectionState::None
        } else if selected == visible.len() {
            SelectionState::All
        } else {
            SelectionState::Some
        }
    }
}
