//! OpenWeatherMap wire models
//!
//! Shapes mirror the JSON of the Geocoding API (`/geo/1.0/direct`,
//! `/geo/1.0/reverse`) and the One Call API (`/data/2.5/onecall`). Only
//! the fields the bot consumes are declared; serde skips the rest.

use serde::Deserialize;

/// One geocoding candidate
#[derive(Debug, Clone, Deserialize)]
pub struct GeoPlace {
    /// Place name as known to the provider
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// ISO country code
    #[serde(default)]
    pub country: Option<String>,
    /// Administrative region, when the provider knows one
    #[serde(default)]
    pub state: Option<String>,
}

/// Condition descriptor nested in every sample
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDesc {
    /// Condition group, e.g. "Clouds" or "Rain"
    pub main: String,
    /// Icon code, e.g. "04d"
    pub icon: String,
}

/// Current conditions block of a One Call response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    /// Observation time, Unix seconds UTC
    pub dt: i64,
    /// Temperature in the requested units
    pub temp: f64,
    /// Perceived temperature
    pub feels_like: f64,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Cloud cover percentage
    pub clouds: u8,
    /// Wind speed in the requested units
    pub wind_speed: f64,
    /// Wind direction in meteorological degrees
    pub wind_deg: f64,
    /// Condition descriptors, usually exactly one
    pub weather: Vec<WeatherDesc>,
}

/// One hourly forecast sample
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    /// Forecast time, Unix seconds UTC
    pub dt: i64,
    /// Temperature
    pub temp: f64,
    /// Perceived temperature
    pub feels_like: f64,
    /// Probability of precipitation, 0.0 to 1.0
    #[serde(default)]
    pub pop: f64,
    /// Condition descriptors
    pub weather: Vec<WeatherDesc>,
}

/// Day and night readings of a daily sample
#[derive(Debug, Clone, Deserialize)]
pub struct DayNightTemps {
    /// Daytime reading
    pub day: f64,
    /// Nighttime reading
    pub night: f64,
}

/// One daily forecast sample
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    /// Forecast time, Unix seconds UTC
    pub dt: i64,
    /// Day and night temperatures
    pub temp: DayNightTemps,
    /// Day and night perceived temperatures
    pub feels_like: DayNightTemps,
    /// Probability of precipitation, 0.0 to 1.0
    #[serde(default)]
    pub pop: f64,
    /// Condition descriptors
    pub weather: Vec<WeatherDesc>,
}

/// Full One Call response
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    /// Shift from UTC of the location's timezone, in seconds
    pub timezone_offset: i64,
    /// Current conditions
    pub current: CurrentData,
    /// Hourly forecast, typically 48 samples
    #[serde(default)]
    pub hourly: Vec<HourlyData>,
    /// Daily forecast, typically 8 samples
    #[serde(default)]
    pub daily: Vec<DailyData>,
}
