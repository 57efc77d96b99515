use crate::commands::{locations_noun, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::storage::Storage;
use crate::wire;

/// Serialize the whole store (not just the view) in the external shape.
/// Where the text goes is up to the front end.
pub fn run<S: Storage>(session: &Session<S>) -> Result<CmdResult> {
    let locations = session.store.list();
    let text = wire::export(locations)?;
    let mut result = CmdResult::default().with_export(text);
    result.add_message(CmdMessage::success(format!(
        "Exported {} {}.",
        locations.len(),
        locations_noun(locations.len())
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{id_of, seeded_session};
    use crate::wire::WireLocation;

    #[test]
    fn exports_whole_store_regardless_of_query() {
        let mut session = seeded_session();
        session.set_query("texas");
        let result = run(&session).unwrap();
        let parsed = wire::parse(result.export.as_deref().unwrap()).unwrap();
        assert_eq!(parsed.len(), 8);
        assert_eq!(result.messages[0].content, "Exported 8 locations.");
    }

    #[test]
    fn export_round_trips_status() {
        let mut session = seeded_session();
        let chicago = id_of(&session, "chicago");
        session.store.set_status(&chicago, true);

        let text = run(&session).unwrap().export.unwrap();
        let restored: Vec<_> = wire::parse(&text)
            .unwrap()
            .into_iter()
            .map(WireLocation::into_location)
            .collect();
        assert!(restored[0].status);
        assert_eq!(restored[0].name, "chicago");
        assert!(restored[1..].iter().all(|l| !l.status));
    }
}
