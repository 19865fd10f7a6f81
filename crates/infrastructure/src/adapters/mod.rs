//! Port adapters over external services

pub mod owm_weather_adapter;

pub use owm_weather_adapter::OwmWeatherAdapter;
