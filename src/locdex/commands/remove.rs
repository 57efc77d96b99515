use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::storage::Storage;
use uuid::Uuid;

/// Remove locations and drop them from the selection. Confirmation happens in
/// the front end before this is called.
pub fn run<S: Storage>(session: &mut Session<S>, ids: &[Uuid]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        session.selection.purge(id);
        if let Some(location) = session.store.remove(id) {
            result.add_message(CmdMessage::success(format!(
                "Removed \"{}\".",
                location.name
            )));
            result.affected_locations.push(location);
        }
    }

    Ok(result.with_summary(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{id_of, seeded_session};

    #[test]
    fn removes_from_store_and_selection() {
        let mut session = seeded_session();
        let chicago = id_of(&session, "chicago");
        let florida = id_of(&session, "florida");
        session.selection.set_all([chicago, florida], true);

        let result = run(&mut session, &[chicago]).unwrap();
        assert_eq!(result.messages[0].content, "Removed \"chicago\".");
        assert!(session.store.get(&chicago).is_none());
        assert!(!session.selection.selected_ids().contains(&chicago));
        assert!(session.selection.is_selected(&florida));
        assert_eq!(result.selected_count, 1);
        assert_eq!(result.counts.unwrap().total, 7);
    }

    #[test]
    fn removing_twice_is_harmless() {
        let mut session = seeded_session();
        let chicago = id_of(&session, "chicago");
        run(&mut session, &[chicago]).unwrap();
        let again = run(&mut session, &[chicago]).unwrap();
        assert!(again.affected_locations.is_empty());
        assert!(!again.has_errors());
    }

    #[test]
    fn removing_everything_leaves_an_empty_store() {
        let mut session = seeded_session();
        let ids: Vec<_> = session.store.list().iter().map(|l| l.id).collect();
        session.selection.set_all(ids.iter().copied(), true);
        run(&mut session, &ids).unwrap();
        assert!(session.store.list().is_empty());
        assert!(session.selection.is_empty());
    }
}
