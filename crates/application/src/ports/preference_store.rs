//! Preference storage port
//!
//! Defines the interface for persisting a user's default place.

use async_trait::async_trait;
use domain::{Place, UserId, UserPreference};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for default-place persistence
///
/// Implementations must make `upsert_default` a single logical
/// insert-or-update so two rapid sets from the same user cannot leave two
/// conflicting rows.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Get the stored preference for a user, if any
    async fn get(&self, user: &UserId) -> Result<Option<UserPreference>, ApplicationError>;

    /// Insert or overwrite the user's default place
    async fn upsert_default(&self, user: &UserId, place: &Place)
    -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PreferenceStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PreferenceStore>();
    }
}
