use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::LocationFields;
use crate::storage::Storage;

pub fn run<S: Storage>(session: &mut Session<S>, fields: LocationFields) -> Result<CmdResult> {
    match session.store.create(fields) {
        Ok(location) => {
            let mut result = CmdResult::default().with_affected_locations(vec![location]);
            result.add_message(CmdMessage::success("Added."));
            Ok(result.with_summary(session))
        }
        Err(e) => CmdResult::default().recover(e),
    }
}
