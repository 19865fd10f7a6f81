//! OpenWeatherMap HTTP client
//!
//! Thin wrapper over the Geocoding and One Call endpoints. The API key is
//! carried as a query parameter per the provider's contract and is never
//! written to logs.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{GeoPlace, OneCallResponse};

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OwmError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// The API key was rejected
    #[error("API key rejected")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// OpenWeatherMap service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmConfig {
    /// API key for all endpoints
    pub api_key: String,

    /// One Call API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL (default: <https://api.openweathermap.org/geo/1.0>)
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Measurement units (default: metric)
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_geo_base_url() -> String {
    "https://api.openweathermap.org/geo/1.0".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_units() -> String {
    "metric".to_string()
}

impl OwmConfig {
    /// Build a configuration with defaults around the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            geo_base_url: default_geo_base_url(),
            timeout_secs: default_timeout(),
            units: default_units(),
        }
    }
}

/// Data blocks excluded from every One Call request
const ONE_CALL_EXCLUDE: &str = "minutely,alerts";

/// Only the first geocoding candidate is ever used
const GEOCODE_LIMIT: &str = "1";

/// OpenWeatherMap HTTP client
#[derive(Debug, Clone)]
pub struct OwmClient {
    client: Client,
    config: OwmConfig,
}

impl OwmClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OwmConfig) -> Result<Self, OwmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OwmError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Look up coordinates for a city name
    ///
    /// An unknown city is a successful empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns `OwmError` on transport or response failures.
    #[instrument(skip(self))]
    pub async fn geocode(&self, city: &str) -> Result<Vec<GeoPlace>, OwmError> {
        let url = format!("{}/direct", self.config.geo_base_url);
        debug!(%city, "Geocoding city name");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("limit", GEOCODE_LIMIT),
                ("appid", &self.config.api_key),
            ])
            .send()
            .await
            .map_err(|e| OwmError::RequestFailed(e.to_string()))?;

        Self::check_status(&response)?;
        response
            .json()
            .await
            .map_err(|e| OwmError::ParseError(e.to_string()))
    }

    /// Look up place names for coordinates
    ///
    /// # Errors
    ///
    /// Returns `OwmError` on invalid coordinates or transport failures.
    #[instrument(skip(self))]
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<GeoPlace>, OwmError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/reverse", self.config.geo_base_url);
        debug!(lat = latitude, lon = longitude, "Reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("limit", GEOCODE_LIMIT.to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| OwmError::RequestFailed(e.to_string()))?;

        Self::check_status(&response)?;
        response
            .json()
            .await
            .map_err(|e| OwmError::ParseError(e.to_string()))
    }

    /// Fetch the full One Call payload for coordinates
    ///
    /// # Errors
    ///
    /// Returns `OwmError` on invalid coordinates or transport failures.
    #[instrument(skip(self))]
    pub async fn one_call(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<OneCallResponse, OwmError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/onecall", self.config.base_url);
        debug!(lat = latitude, lon = longitude, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", self.config.units.clone()),
                ("exclude", ONE_CALL_EXCLUDE.to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| OwmError::RequestFailed(e.to_string()))?;

        Self::check_status(&response)?;
        response
            .json()
            .await
            .map_err(|e| OwmError::ParseError(e.to_string()))
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OwmError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OwmError::InvalidCoordinates);
        }
        Ok(())
    }

    fn check_status(response: &Response) -> Result<(), OwmError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(OwmError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OwmError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OwmError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(OwmError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }
}
