use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::storage::Storage;

use super::helpers::indexed_locations;

/// The current view with counts and selection summary.
pub fn run<S: Storage>(session: &Session<S>) -> Result<CmdResult> {
    let listed = indexed_locations(session);
    let mut result = CmdResult::default().with_listed_locations(listed);
    if result.listed_locations.is_empty() {
        result.add_message(CmdMessage::info("No results."));
    }
    Ok(result.with_summary(session))
}
