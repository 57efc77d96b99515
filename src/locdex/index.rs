//! # Display indexes and selectors
//!
//! Ids are UUIDs, which nobody wants to type. Listings therefore number the
//! visible rows `1..n` and user input can point at a location in three ways:
//!
//! - a positive integer: the row with that number in the current view
//!   (the view depends on the query, so `2` means "the second row I see"),
//! - a full UUID,
//! - anything else: the location's name, compared case-insensitively.
//!
//! Numbers and UUIDs are tried first, so a location named `2024` (or named
//! like a UUID) can only be reached by row number or id. A name shared by
//! several locations is reported as ambiguous instead of picking one.

use crate::model::Location;
use std::str::FromStr;
use uuid::Uuid;

/// A visible row: the location plus its 1-based position in the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLocation {
    pub location: Location,
    pub index: usize,
    pub selected: bool,
}

/// A user input that identifies one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSelector {
    Index(usize),
    Id(Uuid),
    Name(String),
}

impl std::fmt::Display for LocationSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationSelector::Index(i) => write!(f, "{}", i),
            LocationSelector::Id(id) => write!(f, "{}", id),
            LocationSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for LocationSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(LocationSelector::Index(n));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(LocationSelector::Id(id));
        }
        Ok(LocationSelector::Name(s.to_string()))
    }
}

/// Number the visible rows, marking the selected ones.
pub fn index_locations<F>(visible: &[&Location], is_selected: F) -> Vec<DisplayLocation>
where
    F: Fn(&Uuid) -> bool,
{
    visible
        .iter()
        .enumerate()
        .map(|(i, loc)| DisplayLocation {
            location: (*loc).clone(),
            index: i + 1,
            selected: is_selected(&loc.id),
        })
        .collect()
}
