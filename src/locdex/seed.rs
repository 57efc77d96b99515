use crate::error::Result;
use crate::model::Location;
use crate::wire::{self, WireLocation};

/// Built-in locations used when there is no usable snapshot.
const SEED_JSON: &str = r#"[
  { "name": "chicago", "street_address": "1111 W 35th St. 5th Floor", "state": "Illinois", "city": "Chicago", "zip_code": "60609", "status": "0" },
  { "name": "florida", "street_address": "701 Clematis Street, Suite 202", "state": "Florida", "city": "West Palm Beach", "zip_code": "33401-3015", "status": "0" },
  { "name": "newyork", "street_address": "55 West 46th Street", "state": "New York", "city": "New York", "zip_code": "10036-4120", "status": "0" },
  { "name": "western_texas", "street_address": "2532 Reunion Blvd", "state": "Texas", "city": "Austin", "zip_code": "78737", "status": "0" },
  { "name": "eastern_texas", "street_address": "123 N Main St", "state": "Texas", "city": "Tyler", "zip_code": "75702", "status": "0" },
  { "name": "western_pennsylvania", "street_address": "10 Timberlane Dr", "state": "Pennsylvania", "city": "Pittsburgh", "zip_code": "15238", "status": "0" },
  { "name": "northern_georgia", "street_address": "2151 East St NE", "state": "Georgia", "city": "Covington", "zip_code": "30014", "status": "0" },
  { "name": "middle_florida", "street_address": "720 Sunset Blvd", "state": "Florida", "city": "Kissimmee", "zip_code": "34741", "status": "0" }
]"#;

/// The seed list with fresh ids, in its fixed order.
pub fn seed_locations() -> Result<Vec<Location>> {
    Ok(wire::parse(SEED_JSON)?
        .into_iter()
        .map(WireLocation::into_location)
        .collect())
}
