use crate::commands::Session;
use crate::error::{LocdexError, Result};
use crate::index::{index_locations, DisplayLocation, LocationSelector};
use crate::storage::Storage;
use uuid::Uuid;

/// The current view, numbered.
pub fn indexed_locations<S: Storage>(session: &Session<S>) -> Vec<DisplayLocation> {
    index_locations(&session.visible(), |id| session.selection.is_selected(id))
}

/// Resolve selectors to ids. Indexes refer to the current view; ids and names
/// are looked up in the whole store. A name shared by several locations is
/// rejected rather than guessed.
pub fn resolve_selectors<S: Storage>(
    session: &Session<S>,
    selectors: &[LocationSelector],
) -> Result<Vec<Uuid>> {
    let visible = session.visible();
    let mut ids: Vec<Uuid> = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let id = match selector {
            LocationSelector::Index(n) => n
                .checked_sub(1)
                .and_then(|i| visible.get(i))
                .map(|loc| loc.id)
                .ok_or_else(|| LocdexError::Api(format!("Index {} not found in current view", n)))?,
            LocationSelector::Id(id) => session
                .store
                .get(id)
                .map(|loc| loc.id)
                .ok_or(LocdexError::NotFound(*id))?,
            LocationSelector::Name(name) => {
                let wanted = name.to_lowercase();
                let named: Vec<Uuid> = session
                    .store
                    .list()
                    .iter()
                    .filter(|loc| loc.name.to_lowercase() == wanted)
                    .map(|loc| loc.id)
                    .collect();
                match named.as_slice() {
                    [id] => *id,
                    [] => return Err(LocdexError::Api(format!("No location named \"{}\"", name))),
                    _ => {
                        return Err(LocdexError::Api(format!(
                            "{} locations are named \"{}\"; use a row number or id",
                            named.len(),
                            name
                        )))
                    }
                }
            }
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{id_of, seeded_session};
    use crate::model::LocationFields;

    #[test]
    fn indexes_follow_the_query() {
        let mut session = seeded_session();
        session.set_query("texas");
        let ids = resolve_selectors(&session, &[LocationSelector::Index(2)]).unwrap();
        assert_eq!(ids, vec![id_of(&session, "eastern_texas")]);
    }

    #[test]
    fn names_match_case_insensitively_outside_the_view() {
        let mut session = seeded_session();
        session.set_query("texas");
        let ids =
            resolve_selectors(&session, &[LocationSelector::Name("Chicago".into())]).unwrap();
        assert_eq!(ids, vec![id_of(&session, "chicago")]);
    }

    #[test]
    fn duplicates_collapse() {
        let session = seeded_session();
        let chicago = id_of(&session, "chicago");
        let ids = resolve_selectors(
            &session,
            &[
                LocationSelector::Index(1),
                LocationSelector::Id(chicago),
                LocationSelector::Name("chicago".into()),
            ],
        )
        .unwrap();
        assert_eq!(ids, vec![chicago]);
    }

    #[test]
    fn shared_names_are_rejected() {
        let mut session = seeded_session();
        session
            .store
            .create(LocationFields::new("Chicago").with_city("Chicago"))
            .unwrap();

        let err = resolve_selectors(&session, &[LocationSelector::Name("chicago".into())])
            .unwrap_err();
        assert!(err.to_string().contains("2 locations are named"));

        // Rows still tell them apart.
        let ids = resolve_selectors(&session, &[LocationSelector::Index(2)]).unwrap();
        assert_eq!(ids, vec![id_of(&session, "chicago")]);
    }

    #[test]
    fn unknown_selectors_fail() {
        let session = seeded_session();
        assert!(resolve_selectors(&session, &[LocationSelector::Index(99)]).is_err());
        assert!(matches!(
            resolve_selectors(&session, &[LocationSelector::Id(Uuid::new_v4())]),
            Err(LocdexError::NotFound(_))
        ));
        assert!(resolve_selectors(&session, &[LocationSelector::Name("atlantis".into())]).is_err());
    }
}
