//! Weather adapter - Implements `WeatherProvider` using integration_owm
//!
//! Converts the provider's wire models into the port's forecast types.
//! A payload missing its condition descriptor is malformed, not a
//! transport failure; the two are kept apart so callers can phrase the
//! user-facing reply correctly.

use application::ports::{
    CurrentSample, DailySample, ForecastBundle, HourlySample, ProviderError, WeatherProvider,
};
use async_trait::async_trait;
use domain::{GeoLocation, Place};
use integration_owm::{
    CurrentData, DailyData, HourlyData, OneCallResponse, OwmClient, OwmConfig, OwmError,
    WeatherDesc,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the OpenWeatherMap API
pub struct OwmWeatherAdapter {
    client: OwmClient,
}

impl std::fmt::Debug for OwmWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwmWeatherAdapter").finish_non_exhaustive()
    }
}

impl OwmWeatherAdapter {
    /// Create an adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the HTTP client fails to initialize.
    pub fn new(config: OwmConfig) -> Result<Self, ProviderError> {
        let client = OwmClient::new(config).map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map an integration error to a port error
    fn map_error(err: OwmError) -> ProviderError {
        match err {
            OwmError::ParseError(e) => ProviderError::Malformed(e),
            other => ProviderError::Unavailable(other.to_string()),
        }
    }

    /// Pull the leading condition descriptor out of a sample
    fn first_condition(weather: &[WeatherDesc]) -> Result<&WeatherDesc, ProviderError> {
        weather
            .first()
            .ok_or_else(|| ProviderError::Malformed("Missing weather descriptor".to_string()))
    }

    fn map_current(current: &CurrentData) -> Result<CurrentSample, ProviderError> {
        let desc = Self::first_condition(&current.weather)?;
        Ok(CurrentSample {
            timestamp: current.dt,
            temperature: current.temp,
            feels_like: current.feels_like,
            condition: desc.main.clone(),
            icon: desc.icon.clone(),
            pressure: current.pressure,
            humidity: current.humidity,
            wind_speed: current.wind_speed,
            wind_deg: current.wind_deg,
            cloudiness: current.clouds,
        })
    }

    fn map_hourly(hour: &HourlyData) -> Result<HourlySample, ProviderError> {
        let desc = Self::first_condition(&hour.weather)?;
        Ok(HourlySample {
            timestamp: hour.dt,
            temperature: hour.temp,
            feels_like: hour.feels_like,
            condition: desc.main.clone(),
            icon: desc.icon.clone(),
            precipitation_probability: hour.pop,
        })
    }

    fn map_daily(day: &DailyData) -> Result<DailySample, ProviderError> {
        let desc = Self::first_condition(&day.weather)?;
        Ok(DailySample {
            timestamp: day.dt,
            day_temperature: day.temp.day,
            night_temperature: day.temp.night,
            day_feels_like: day.feels_like.day,
            night_feels_like: day.feels_like.night,
            condition: desc.main.clone(),
            icon: desc.icon.clone(),
            precipitation_probability: day.pop,
        })
    }

    fn map_bundle(response: &OneCallResponse) -> Result<ForecastBundle, ProviderError> {
        Ok(ForecastBundle {
            timezone_offset: response.timezone_offset,
            current: Self::map_current(&response.current)?,
            hourly: response
                .hourly
                .iter()
                .map(Self::map_hourly)
                .collect::<Result<_, _>>()?,
            daily: response
                .daily
                .iter()
                .map(Self::map_daily)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[async_trait]
impl WeatherProvider for OwmWeatherAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, city: &str) -> Result<Vec<Place>, ProviderError> {
        let candidates = self.client.geocode(city).await.map_err(Self::map_error)?;
        debug!(candidates = candidates.len(), "Geocoded city name");

        candidates
            .into_iter()
            .map(|place| {
                let location = GeoLocation::new(place.lat, place.lon).map_err(|e| {
                    ProviderError::Malformed(format!("Geocoding returned {e}"))
                })?;
                Ok(Place::new(place.name, location))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, location: GeoLocation) -> Result<Vec<String>, ProviderError> {
        let places = self
            .client
            .reverse_geocode(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;
        debug!(names = places.len(), "Reverse geocoded coordinates");

        Ok(places.into_iter().map(|place| place.name).collect())
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn forecast(&self, location: GeoLocation) -> Result<ForecastBundle, ProviderError> {
        let response = self
            .client
            .one_call(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;
        debug!(
            hourly = response.hourly.len(),
            daily = response.daily.len(),
            "Fetched forecast payload"
        );

        Self::map_bundle(&response)
    }
}
