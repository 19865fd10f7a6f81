//! User preference entity
//!
//! A user's committed default place, used when a report request carries no
//! explicit city name. At most one preference exists per user; setting a
//! new default overwrites the old one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Place;
use crate::value_objects::UserId;

/// A user's default place for weather reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreference {
    user_id: UserId,
    default_place: Place,
    updated_at: DateTime<Utc>,
}

impl UserPreference {
    /// Create a preference for a freshly committed default place
    #[must_use]
    pub fn new(user_id: UserId, default_place: Place) -> Self {
        Self {
            user_id,
            default_place,
            updated_at: Utc::now(),
        }
    }

    /// Restore a preference from storage
    #[must_use]
    pub const fn restore(
        user_id: UserId,
        default_place: Place,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            default_place,
            updated_at,
        }
    }

    /// Get the owning user
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Get the default place
    #[must_use]
    pub const fn default_place(&self) -> &Place {
        &self.default_place
    }

    /// Get the last update timestamp
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the default place
    pub fn set_default_place(&mut self, place: Place) {
        self.default_place = place;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::GeoLocation;

    fn kyiv() -> Place {
        Place::new("Kyiv", GeoLocation::new_unchecked(50.45, 30.52))
    }

    #[test]
    fn new_preference_holds_place() {
        let pref = UserPreference::new(UserId::new("1"), kyiv());
        assert_eq!(pref.default_place().name, "Kyiv");
        assert_eq!(pref.user_id().as_str(), "1");
    }

    #[test]
    fn set_default_place_overwrites() {
        let mut pref = UserPreference::new(UserId::new("1"), kyiv());
        let before = pref.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(5));
        pref.set_default_place(Place::new("Odesa", GeoLocation::new_unchecked(46.48, 30.72)));
        assert_eq!(pref.default_place().name, "Odesa");
        assert!(pref.updated_at() > before);
    }
}
