use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::LocationFields;
use crate::storage::Storage;
use uuid::Uuid;

/// A full edit of one location's text fields.
#[derive(Debug, Clone)]
pub struct LocationUpdate {
    pub id: Uuid,
    pub fields: LocationFields,
}

impl LocationUpdate {
    pub fn new(id: Uuid, fields: LocationFields) -> Self {
        Self { id, fields }
    }
}

pub fn run<S: Storage>(session: &mut Session<S>, update: LocationUpdate) -> Result<CmdResult> {
    match session.store.update(&update.id, update.fields) {
        Ok(location) => {
            let mut result = CmdResult::default().with_affected_locations(vec![location]);
            result.add_message(CmdMessage::success("Saved changes."));
            Ok(result)
        }
        Err(e) => CmdResult::default().recover(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{id_of, seeded_session};

    #[test]
    fn saves_trimmed_fields() {
        let mut session = seeded_session();
        let id = id_of(&session, "chicago");
        let fields = LocationFields::new(" Chicago HQ ").with_city("Chicago");
        let result = run(&mut session, LocationUpdate::new(id, fields)).unwrap();

        assert_eq!(result.messages[0].content, "Saved changes.");
        assert_eq!(session.store.get(&id).unwrap().name, "Chicago HQ");
        assert_eq!(session.store.get(&id).unwrap().street_address, "");
    }

    #[test]
    fn blank_name_is_rejected_and_record_kept() {
        let mut session = seeded_session();
        let id = id_of(&session, "chicago");
        let before = session.store.get(&id).cloned();

        let result = run(&mut session, LocationUpdate::new(id, LocationFields::new("  "))).unwrap();
        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Name cannot be empty.");
        assert_eq!(session.store.get(&id).cloned(), before);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut session = seeded_session();
        let result = run(
            &mut session,
            LocationUpdate::new(Uuid::new_v4(), LocationFields::new("x")),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(result.messages[0].content.starts_with("Location not found"));
    }
}
