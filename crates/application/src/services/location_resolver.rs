//! Location resolver
//!
//! Turns "an explicit city name, or the user's stored default" into
//! coordinates. The four-way outcome must be exhaustively handled by the
//! caller before any forecast is fetched.

use std::sync::Arc;

use domain::{Place, UserId};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{PreferenceStore, ProviderError, WeatherProvider};

/// Result of resolving a weather request to a place
///
/// Exactly one tag is active; `ProviderUnavailable` here covers only the
/// geocoding call (stored defaults are used without any network call).
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// A place was found
    Resolved(Place),
    /// Geocoding returned no candidates for the explicit name
    NotFound,
    /// No explicit name was given and the user has no stored default
    NoDefaultConfigured,
    /// The geocoding call failed
    ProviderUnavailable,
}

/// Resolves report requests to coordinates
#[derive(Clone)]
pub struct LocationResolver {
    provider: Arc<dyn WeatherProvider>,
    preferences: Arc<dyn PreferenceStore>,
}

impl std::fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationResolver").finish_non_exhaustive()
    }
}

impl LocationResolver {
    /// Create a resolver over the given provider and preference store
    pub fn new(provider: Arc<dyn WeatherProvider>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            provider,
            preferences,
        }
    }

    /// Resolve an optional explicit city name for a user
    ///
    /// An explicit non-empty name is geocoded (first candidate wins); with
    /// no name the stored default is returned as-is, without re-geocoding.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` only for preference store failures; all
    /// expected conditions are `ResolutionOutcome` tags.
    #[instrument(skip(self), fields(user = %user))]
    pub async fn resolve(
        &self,
        explicit_city: Option<&str>,
        user: &UserId,
    ) -> Result<ResolutionOutcome, ApplicationError> {
        let city = explicit_city.map(str::trim).filter(|c| !c.is_empty());

        let Some(city) = city else {
            return match self.preferences.get(user).await? {
                Some(pref) => {
                    debug!(city = %pref.default_place().name, "Using stored default city");
                    Ok(ResolutionOutcome::Resolved(pref.default_place().clone()))
                },
                None => Ok(ResolutionOutcome::NoDefaultConfigured),
            };
        };

        match self.provider.geocode(city).await {
            Ok(candidates) => Ok(candidates.into_iter().next().map_or(
                ResolutionOutcome::NotFound,
                ResolutionOutcome::Resolved,
            )),
            Err(ProviderError::Unavailable(reason) | ProviderError::Malformed(reason)) => {
                debug!(%reason, "Geocoding failed");
                Ok(ResolutionOutcome::ProviderUnavailable)
            },
        }
    }
}
