//! Infrastructure layer - External system implementations
//!
//! SQLite-backed preference storage, in-memory session state, the
//! OpenWeatherMap provider adapter, and configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod session;

pub use adapters::OwmWeatherAdapter;
pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqlitePreferenceStore, create_pool};
pub use session::InMemorySessionStore;
