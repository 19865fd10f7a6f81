//! Port definitions - Interfaces to external collaborators
//!
//! The weather provider, preference store, and session store are external
//! to the core; these traits let infrastructure adapters (and test fakes)
//! plug in.

mod preference_store;
mod session_store;
mod weather_provider;

pub use preference_store::PreferenceStore;
pub use session_store::SessionStore;
pub use weather_provider::{
    CurrentSample, DailySample, ForecastBundle, HourlySample, ProviderError, WeatherProvider,
};

#[cfg(test)]
pub use preference_store::MockPreferenceStore;
#[cfg(test)]
pub use session_store::MockSessionStore;
#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
