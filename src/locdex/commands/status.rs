use crate::commands::{locations_noun, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::storage::Storage;
use uuid::Uuid;

/// Switch individual locations on or off. Unknown ids are skipped silently.
pub fn set<S: Storage>(session: &mut Session<S>, ids: &[Uuid], enabled: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        if let Some(location) = session.store.set_status(id, enabled) {
            result.add_message(CmdMessage::success(format!(
                "{}: {}",
                location.name,
                location.status_label()
            )));
            result.affected_locations.push(location);
        }
    }

    Ok(result.with_summary(session))
}

/// Switch every selected location on or off with a single write.
pub fn bulk<S: Storage>(session: &mut Session<S>, enabled: bool) -> Result<CmdResult> {
    let ids = session.selection.selected_ids();
    let count = ids.len();

    if let Err(e) = session.store.bulk_set_status(&ids, enabled) {
        return CmdResult::default().recover(e);
    }

    let affected = session
        .store
        .list()
        .iter()
        .filter(|l| ids.contains(&l.id))
        .cloned()
        .collect();
    let mut result = CmdResult::default().with_affected_locations(affected);
    result.add_message(CmdMessage::success(format!(
        "{} {} {}.",
        if enabled { "Enabled" } else { "Disabled" },
        count,
        locations_noun(count)
    )));
    Ok(result.with_summary(session))
}
