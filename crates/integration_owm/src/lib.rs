//! OpenWeatherMap integration
//!
//! Raw HTTP client for the OpenWeatherMap Geocoding and One Call APIs.
//! Returns wire-shaped models; mapping into application types happens in
//! the infrastructure adapter.

mod client;
mod models;

pub use client::{OwmClient, OwmConfig, OwmError};
pub use models::{
    CurrentData, DailyData, DayNightTemps, GeoPlace, HourlyData, OneCallResponse, WeatherDesc,
};
