//! Default-city dialog
//!
//! A two-step flow per user: a prompt opens the dialog, the next plain
//! text message is treated as a city name. The dialog only closes on a
//! successful commit or an explicit cancel; transient failures keep it
//! open so the user can retry without re-issuing the command.

use std::sync::Arc;

use domain::{ConversationState, UserId};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{PreferenceStore, SessionStore, WeatherProvider};
use crate::services::replies;

/// Drives the set-default-city dialog
#[derive(Clone)]
pub struct SessionFlow {
    provider: Arc<dyn WeatherProvider>,
    preferences: Arc<dyn PreferenceStore>,
    sessions: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionFlow").finish_non_exhaustive()
    }
}

impl SessionFlow {
    /// Create a flow over the given provider and stores
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        preferences: Arc<dyn PreferenceStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            provider,
            preferences,
            sessions,
        }
    }

    /// Open the dialog and prompt for a city name
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` if the session state cannot be stored.
    #[instrument(skip(self), fields(user = %user))]
    pub async fn begin(&self, user: &UserId) -> Result<String, ApplicationError> {
        self.sessions
            .set(user, ConversationState::AwaitingCityName)
            .await?;
        Ok(replies::CITY_PROMPT.to_string())
    }

    /// Handle the city-name answer
    ///
    /// Geocodes the answer; the new default is committed only when exactly
    /// a candidate exists. On "not found" or a provider outage the dialog
    /// stays open and the stored preference is untouched.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` for preference or session store failures.
    #[instrument(skip(self, text), fields(user = %user))]
    pub async fn answer(&self, user: &UserId, text: &str) -> Result<String, ApplicationError> {
        let city = text.trim();
        if city.is_empty() {
            return Ok(replies::CITY_PROMPT.to_string());
        }

        let candidates = match self.provider.geocode(city).await {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!(error = %e, "Geocoding failed, keeping dialog open");
                return Ok(replies::NO_CONNECTION.to_string());
            },
        };

        let Some(place) = candidates.into_iter().next() else {
            debug!(%city, "No geocoding candidates, keeping dialog open");
            return Ok(replies::LOCATION_NOT_FOUND_TRY_AGAIN.to_string());
        };

        self.preferences.upsert_default(user, &place).await?;
        self.sessions.set(user, ConversationState::Idle).await?;
        info!(city = %place.name, "Default city committed");
        Ok(replies::city_set(&place.name))
    }

    /// Abort the dialog without touching the stored preference
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` if the session state cannot be stored.
    #[instrument(skip(self), fields(user = %user))]
    pub async fn cancel(&self, user: &UserId) -> Result<String, ApplicationError> {
        self.sessions.set(user, ConversationState::Idle).await?;
        Ok(replies::CANCELLED.to_string())
    }
}
