use crate::commands::{CmdResult, Session};
use crate::error::Result;
use crate::storage::Storage;

use super::list;

/// Replace the session query and list what it lets through.
pub fn run<S: Storage>(session: &mut Session<S>, query: &str) -> Result<CmdResult> {
    tracing::debug!(query, "query changed");
    session.set_query(query);
    list::run(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{id_of, seeded_session};
    use crate::selection::SelectionState;

    #[test]
    fn texas_lists_two_rows() {
        let mut session = seeded_session();
        let result = run(&mut session, "texas").unwrap();
        let names: Vec<_> = result
            .listed_locations
            .iter()
            .map(|dp| dp.location.name.as_str())
            .collect();
        assert_eq!(names, vec!["western_texas", "eastern_texas"]);
        assert_eq!(session.query(), "texas");
    }

    #[test]
    fn selection_state_is_relative_to_the_view() {
        let mut session = seeded_session();
        session.selection.set_all(
            [id_of(&session, "western_texas"), id_of(&session, "eastern_texas")],
            true,
        );
        assert_eq!(session.selection_state(), SelectionState::Some);

        let result = run(&mut session, "TEXAS").unwrap();
        assert_eq!(result.selection_state, Some(SelectionState::All));

        let result = run(&mut session, "").unwrap();
        assert_eq!(result.selection_state, Some(SelectionState::Some));
        assert_eq!(result.listed_locations.len(), 8);
    }
}
