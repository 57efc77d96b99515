use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The editable text fields of a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFields {
    pub name: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
}

impl LocationFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_street_address(mut self, street_address: impl Into<String>) -> Self {
        self.street_address = street_address.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = zip_code.into();
        self
    }

    /// Copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            street_address: self.street_address.trim().to_string(),
            state: self.state.trim().to_string(),
            city: self.city.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
        }
    }
}

/// A stored location. This is also the shape of the persisted snapshot,
/// where `status` stays a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub status: bool,
}

impl Location {
    /// Builds a fresh location with a newly allocated id. Callers are
    /// responsible for validating `fields` first.
    pub fn new(fields: LocationFields, status: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            street_address: fields.street_address,
            state: fields.state,
            city: fields.city,
            zip_code: fields.zip_code,
            status,
        }
    }

    pub fn fields(&self) -> LocationFields {
        LocationFields {
            name: self.name.clone(),
            street_address: self.street_address.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
        }
    }

    /// Overwrites the text fields, leaving id and status alone.
    pub fn apply(&mut self, fields: LocationFields) {
        self.name = fields.name;
        self.street_address = fields.street_address;
        self.state = fields.state;
        self.city = fields.city;
        self.zip_code = fields.zip_code;
    }

    /// The fields searched by the view filter, in display order.
    pub fn searchable(&self) -> [&str; 5] {
        [
            &self.name,
            &self.street_address,
            &self.state,
            &self.city,
            &self.zip_code,
        ]
    }

    pub fn status_label(&self) -> &'static str {
        if self.status {
            "enabled"
        } else {
            "disabled"
        }
    }
}

/// Totals shown above the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub enabled: usize,
    pub disabled: usize,
}

impl Counts {
    pub fn of(locations: &[Location]) -> Self {
        let total = locations.len();
        let enabled = locations.iter().filter(|l| l.status).count();
        Self {
            total,
            enabled,
            disabled: total - enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_strips_every_field() {
        let fields = LocationFields::new("  hq ")
            .with_street_address(" 1 Main St ")
            .with_state("\tOhio")
            .with_city("Dayton  ")
            .with_zip_code(" 45402 ");
        let t = fields.trimmed();
        assert_eq!(t.name, "hq");
        assert_eq!(t.street_address, "1 Main St");
        assert_eq!(t.state, "Ohio");
        assert_eq!(t.city, "Dayton");
        assert_eq!(t.zip_code, "45402");
    }

    #[test]
    fn apply_keeps_id_and_status() {
        let mut loc = Location::new(LocationFields::new("a"), true);
        let id = loc.id;
        loc.apply(LocationFields::new("b").with_city("Tyler"));
        assert_eq!(loc.id, id);
        assert!(loc.status);
        assert_eq!(loc.name, "b");
        assert_eq!(loc.city, "Tyler");
    }

    #[test]
    fn snapshot_shape_defaults_missing_text_fields() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{}","name":"x","status":true}}"#, id);
        let loc: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc.id, id);
        assert_eq!(loc.street_address, "");
        assert!(loc.status);
    }

    #[test]
    fn counts_split_by_status() {
        let locs = vec![
            Location::new(LocationFields::new("a"), true),
            Location::new(LocationFields::new("b"), false),
            Location::new(LocationFields::new("c"), false),
        ];
        assert_eq!(
            Counts::of(&locs),
            Counts {
                total: 3,
                enabled: 1,
                disabled: 2
            }
        );
    }
}
