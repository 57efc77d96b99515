//! External JSON shape for locations, shared by export, import and the seed
//! list.
//!
//! The wire shape differs from the snapshot in two ways: it carries no id, and
//! `status` is the string `"1"` (enabled) or `"0"` (disabled). Reading is total:
//!
//! | JSON `status` value                         | enabled |
//! |---------------------------------------------|---------|
//! | `"1"`                                       | `true`  |
//! | `"0"`, any other string                     | `false` |
//! | absent, `null`                              | `false` |
//! | numbers (including `1`), booleans (including `true`), arrays, objects | `false` |
//!
//! Text fields that are absent or `null` read as `""`; numbers and booleans
//! read as their JSON text (`60609` becomes `"60609"`); arrays and objects read
//! as `""`.

use crate::error::{LocdexError, Result};
use crate::model::{Location, LocationFields};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireLocation {
    #[serde(default, deserialize_with = "text_from_wire")]
    pub name: String,
    #[serde(default, deserialize_with = "text_from_wire")]
    pub street_address: String,
    #[serde(default, deserialize_with = "text_from_wire")]
    pub state: String,
    #[serde(default, deserialize_with = "text_from_wire")]
    pub city: String,
    #[serde(default, deserialize_with = "text_from_wire")]
    pub zip_code: String,
    #[serde(
        default,
        deserialize_with = "status_from_wire",
        serialize_with = "status_to_wire"
    )]
    pub status: bool,
}

impl WireLocation {
    pub fn fields(&self) -> LocationFields {
        LocationFields {
            name: self.name.clone(),
            street_address: self.street_address.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
        }
    }

    /// Convert to a stored location with a freshly allocated id.
    pub fn into_location(self) -> Location {
        let status = self.status;
        Location::new(self.fields(), status)
    }
}

impl From<&Location> for WireLocation {
    fn from(loc: &Location) -> Self {
        Self {
            name: loc.name.clone(),
            street_address: loc.street_address.clone(),
            state: loc.state.clone(),
            city: loc.city.clone(),
            zip_code: loc.zip_code.clone(),
            status: loc.status,
        }
    }
}

/// The boundary conversion for `status`: only the string `"1"` is enabled.
pub fn status_flag(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if s == "1")
}

fn status_from_wire<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(status_flag(value.as_ref()))
}

fn status_to_wire<S>(status: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *status { "1" } else { "0" })
}

fn text_from_wire<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Serialize `locations` as a pretty-printed JSON array in the given order.
pub fn export(locations: &[Location]) -> Result<String> {
    let payload: Vec<WireLocation> = locations.iter().map(WireLocation::from).collect();
    serde_json::to_string_pretty(&payload).map_err(LocdexError::Serialization)
}

/// Parse a JSON array in the external shape.
pub fn parse(json: &str) -> Result<Vec<WireLocation>> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(LocdexError::validation("Expected a JSON array of locations."));
    }
    Ok(serde_json::from_value(value)?)
}
