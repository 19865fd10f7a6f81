//! Place entity - A named geographic location

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A geocoded place: the provider's display name plus its coordinates
///
/// Produced by geocoding and immutable once obtained. A place is only
/// persisted when the session flow commits it as a user's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name as returned by the geocoder
    pub name: String,
    /// Coordinates of the place
    pub location: GeoLocation,
}

impl Place {
    /// Create a place from a geocoder result
    pub fn new(name: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_keeps_name_and_coordinates() {
        let loc = GeoLocation::new(50.45, 30.52).expect("valid");
        let place = Place::new("Kyiv", loc);
        assert_eq!(place.name, "Kyiv");
        assert_eq!(place.location, loc);
    }

    #[test]
    fn serialization_round_trips() {
        let place = Place::new("Lviv", GeoLocation::new_unchecked(49.84, 24.03));
        let json = serde_json::to_string(&place).expect("serialize");
        let parsed: Place = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(place, parsed);
    }
}
