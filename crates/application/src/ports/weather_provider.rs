//! Weather provider port
//!
//! Defines the interface to the external weather service: geocoding,
//! reverse geocoding, and forecast retrieval. The forecast payload is
//! normalized into the samples the report renderer consumes.

use async_trait::async_trait;
use domain::{GeoLocation, Place};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the weather provider
///
/// Any non-2xx transport status collapses into `Unavailable`; the core
/// deliberately preserves no distinction between timeout, 4xx, and 5xx.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not be reached or answered with a non-success status
    #[error("Weather provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered 2xx but the body did not match its schema
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

/// The "current" snapshot of a forecast payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSample {
    /// Observation time, Unix seconds (UTC)
    pub timestamp: i64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Feels-like temperature in degrees Celsius
    pub feels_like: f64,
    /// Condition label, e.g. "Clouds"
    pub condition: String,
    /// Provider icon code, e.g. "04d"
    pub icon: String,
    /// Atmospheric pressure as reported by the provider
    pub pressure: u32,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_deg: f64,
    /// Cloudiness in percent (0-100)
    pub cloudiness: u8,
}

/// One hourly forecast sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySample {
    /// Sample time, Unix seconds (UTC)
    pub timestamp: i64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Feels-like temperature in degrees Celsius
    pub feels_like: f64,
    /// Condition label
    pub condition: String,
    /// Provider icon code
    pub icon: String,
    /// Precipitation probability (0.0-1.0)
    pub precipitation_probability: f64,
}

/// One daily forecast sample with day/night temperature pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySample {
    /// Sample time, Unix seconds (UTC)
    pub timestamp: i64,
    /// Daytime temperature in degrees Celsius
    pub day_temperature: f64,
    /// Night temperature in degrees Celsius
    pub night_temperature: f64,
    /// Daytime feels-like temperature
    pub day_feels_like: f64,
    /// Night feels-like temperature
    pub night_feels_like: f64,
    /// Condition label
    pub condition: String,
    /// Provider icon code
    pub icon: String,
    /// Precipitation probability (0.0-1.0)
    pub precipitation_probability: f64,
}

/// A complete, normalized forecast payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastBundle {
    /// Offset from UTC in seconds, used to render local-looking timestamps
    pub timezone_offset: i64,
    /// Current conditions
    pub current: CurrentSample,
    /// Hourly samples (the first 24 are rendered)
    pub hourly: Vec<HourlySample>,
    /// Daily samples (typically 7)
    pub daily: Vec<DailySample>,
}

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Resolve a free-text city name to candidate places
    ///
    /// Requests exactly one candidate from the provider; an empty vector
    /// means the name is unknown to the provider's database.
    async fn geocode(&self, city: &str) -> Result<Vec<Place>, ProviderError>;

    /// Resolve coordinates to display place names (best effort)
    async fn reverse_geocode(&self, location: GeoLocation) -> Result<Vec<String>, ProviderError>;

    /// Fetch the forecast payload for a location
    async fn forecast(&self, location: GeoLocation) -> Result<ForecastBundle, ProviderError>;
}
