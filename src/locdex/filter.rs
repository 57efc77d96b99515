use crate::model::Location;

/// Normalizes a raw query the way [`filter`] does: trimmed and lower-cased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns the locations visible for `query`, in store order.
///
/// A blank query shows everything. Otherwise a location is visible when the
/// query is a case-insensitive substring of its name, street address, state,
/// city or zip code. There is no index; the scan is redone on every call.
pub fn filter<'a>(locations: &'a [Location], query: &str) -> Vec<&'a Location> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return locations.iter().collect();
    }

    locations
        .iter()
        .filter(|loc| is_match(loc, &needle))
        .collect()
}

fn is_match(location: &Location, needle: &str) -> bool {
    location
        .searchable()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
