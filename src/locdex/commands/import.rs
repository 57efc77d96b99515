use crate::commands::{locations_noun, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::Location;
use crate::storage::Storage;
use crate::wire;

/// Add the locations in an export-format document to the top of the store,
/// keeping their order. Entries without a name are skipped with a warning.
pub fn run<S: Storage>(session: &mut Session<S>, json: &str) -> Result<CmdResult> {
    let entries = match wire::parse(json) {
        Ok(entries) => entries,
        Err(e) => return CmdResult::default().recover(e),
    };

    let mut result = CmdResult::default();
    let mut batch: Vec<Location> = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        let fields = entry.fields().trimmed();
        if fields.name.is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "Skipped entry {}: name is required.",
                i + 1
            )));
            continue;
        }
        batch.push(Location::new(fields, entry.status));
    }

    if batch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to import."));
        return Ok(result.with_summary(session));
    }

    let count = session.store.insert_many(batch.clone())?;
    result.add_message(CmdMessage::success(format!(
        "Imported {} {}.",
        count,
        locations_noun(count)
    )));
    Ok(result.with_affected_locations(batch).with_summary(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::seeded_session;
    use crate::commands::MessageLevel;

    #[test]
    fn imports_in_file_order_at_the_top() {
        let mut session = seeded_session();
        let json = r#"[
            {"name": "depot", "city": "Reno", "status": "1"},
            {"name": "annex", "status": "0"}
        ]"#;
        let result = run(&mut session, json).unwrap();

        assert_eq!(result.messages[0].content, "Imported 2 locations.");
        let list = session.store.list();
        assert_eq!(list.len(), 10);
        assert_eq!(list[0].name, "depot");
        assert!(list[0].status);
        assert_eq!(list[1].name, "annex");
        assert!(!list[1].status);
        assert_eq!(list[2].name, "chicago");
    }

    #[test]
    fn skips_entries_without_name() {
        let mut session = seeded_session();
        let json = r#"[{"name": "  "}, {"city": "Nowhere"}, {"name": "ok"}]"#;
        let result = run(&mut session, json).unwrap();

        let warnings = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .count();
        assert_eq!(warnings, 2);
        assert_eq!(result.affected_locations.len(), 1);
        assert_eq!(session.store.list().len(), 9);
    }

    #[test]
    fn rejects_non_array_documents() {
        let mut session = seeded_session();
        let result = run(&mut session, r#"{"name": "x"}"#).unwrap();
        assert!(result.has_errors());
        assert_eq!(session.store.list().len(), 8);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut session = seeded_session();
        assert!(run(&mut session, "not json").is_err());
    }
}
