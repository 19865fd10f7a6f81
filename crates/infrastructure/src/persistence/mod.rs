//! Persistence layer
//!
//! SQLite connection pooling, embedded schema migrations, and the
//! preference store implementation.

pub mod connection;
pub mod migrations;
pub mod preference_store;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use preference_store::SqlitePreferenceStore;
