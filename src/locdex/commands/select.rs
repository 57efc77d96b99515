use crate::commands::{CmdResult, Session};
use crate::error::Result;
use crate::storage::Storage;
use uuid::Uuid;

/// Select or unselect specific locations.
pub fn toggle<S: Storage>(session: &mut Session<S>, ids: &[Uuid], value: bool) -> Result<CmdResult> {
    session.selection.set_all(ids.iter().copied(), value);
    Ok(summary(session))
}

/// The "select all" checkbox: applies to the visible rows only.
pub fn all_visible<S: Storage>(session: &mut Session<S>, value: bool) -> Result<CmdResult> {
    let visible: Vec<Uuid> = session.visible().iter().map(|l| l.id).collect();
    session.selection.set_all(visible, value);
    Ok(summary(session))
}

pub fn clear<S: Storage>(session: &mut Session<S>) -> Result<CmdResult> {
    if !session.selection.is_empty() {
        session.selection.clear();
    }
    Ok(summary(session))
}

fn summary<S: Storage>(session: &Session<S>) -> CmdResult {
    CmdResult::default().with_summary(session)
}
