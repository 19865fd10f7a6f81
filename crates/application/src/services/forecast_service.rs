//! Forecast fetcher
//!
//! Wraps the provider's forecast call, collapsing every transport failure
//! into one error, and supplies a best-effort display name for the report
//! header via reverse geocoding.

use std::sync::Arc;

use domain::GeoLocation;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::ports::{ForecastBundle, WeatherProvider};

/// Failure of a forecast fetch
///
/// No distinction between timeout, 4xx, and 5xx is preserved; a failed
/// call surfaces immediately, there is no retry policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The provider could not deliver a forecast
    #[error("Weather provider unavailable")]
    ProviderUnavailable,
}

/// Fetches forecast payloads and display names
#[derive(Clone)]
pub struct ForecastService {
    provider: Arc<dyn WeatherProvider>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a fetcher over the given provider
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the forecast payload for a location
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ProviderUnavailable` for any provider failure.
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn fetch(&self, location: GeoLocation) -> Result<ForecastBundle, FetchError> {
        match self.provider.forecast(location).await {
            Ok(bundle) => {
                debug!(
                    hourly = bundle.hourly.len(),
                    daily = bundle.daily.len(),
                    "Fetched forecast"
                );
                Ok(bundle)
            },
            Err(e) => {
                debug!(error = %e, "Forecast fetch failed");
                Err(FetchError::ProviderUnavailable)
            },
        }
    }

    /// Resolve a display name for the report header, best effort
    ///
    /// Reverse-geocodes the coordinates; if that fails (or returns
    /// nothing) the already-fetched forecast must not be discarded, so
    /// this degrades to the originally queried name, or to the raw
    /// coordinates when no query string exists.
    #[instrument(skip(self, queried_name))]
    pub async fn display_name(
        &self,
        location: GeoLocation,
        queried_name: Option<&str>,
    ) -> String {
        match self.provider.reverse_geocode(location).await {
            Ok(names) if !names.is_empty() => names.into_iter().next().unwrap_or_default(),
            Ok(_) => {
                warn!("Reverse geocoding returned no names, degrading display name");
                Self::fallback_name(location, queried_name)
            },
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed, degrading display name");
                Self::fallback_name(location, queried_name)
            },
        }
    }

    fn fallback_name(location: GeoLocation, queried_name: Option<&str>) -> String {
        queried_name.map_or_else(|| location.to_string(), str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CurrentSample, MockWeatherProvider, ProviderError};

    fn sample_bundle() -> ForecastBundle {
        ForecastBundle {
            timezone_offset: 7200,
            current: CurrentSample {
                timestamp: 1_700_000_000,
                temperature: 4.2,
                feels_like: 1.3,
                condition: "Clouds".to_string(),
                icon: "04d".to_string(),
                pressure: 1013,
                humidity: 80,
                wind_speed: 3.4,
                wind_deg: 270.0,
                cloudiness: 90,
            },
            hourly: vec![],
            daily: vec![],
        }
    }

    fn kyiv_coords() -> GeoLocation {
        GeoLocation::new_unchecked(50.45, 30.52)
    }

    #[tokio::test]
    async fn fetch_returns_bundle_on_success() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_forecast().returning(|_| Ok(sample_bundle()));

        let service = ForecastService::new(Arc::new(provider));
        let bundle = service.fetch(kyiv_coords()).await.unwrap();
        assert_eq!(bundle.timezone_offset, 7200);
    }

    #[tokio::test]
    async fn any_provider_failure_collapses_to_unavailable() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_forecast()
            .returning(|_| Err(ProviderError::Unavailable("HTTP 500".into())));

        let service = ForecastService::new(Arc::new(provider));
        let err = service.fetch(kyiv_coords()).await.unwrap_err();
        assert_eq!(err, FetchError::ProviderUnavailable);
    }

    #[tokio::test]
    async fn display_name_prefers_reverse_geocode() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_reverse_geocode()
            .returning(|_| Ok(vec!["Kyiv".to_string()]));

        let service = ForecastService::new(Arc::new(provider));
        let name = service.display_name(kyiv_coords(), Some("kiev")).await;
        assert_eq!(name, "Kyiv");
    }

    #[tokio::test]
    async fn display_name_degrades_to_queried_name() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_reverse_geocode()
            .returning(|_| Err(ProviderError::Unavailable("timeout".into())));

        let service = ForecastService::new(Arc::new(provider));
        let name = service.display_name(kyiv_coords(), Some("Kyiv")).await;
        assert_eq!(name, "Kyiv");
    }

    #[tokio::test]
    async fn display_name_degrades_to_coordinates_without_query() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_reverse_geocode().returning(|_| Ok(vec![]));

        let service = ForecastService::new(Arc::new(provider));
        let name = service.display_name(kyiv_coords(), None).await;
        assert!(name.contains("50.45"));
        assert!(name.contains("30.52"));
    }
}
