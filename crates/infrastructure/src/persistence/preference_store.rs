//! SQLite preference store implementation
//!
//! Implements the `PreferenceStore` port using SQLite. The upsert runs as
//! a single `INSERT ... ON CONFLICT` statement, so concurrent commits for
//! the same user cannot interleave into a torn row.

use std::sync::Arc;

use application::{error::ApplicationError, ports::PreferenceStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{GeoLocation, Place, UserId, UserPreference};
use rusqlite::{OptionalExtension, Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based preference store
#[derive(Debug, Clone)]
pub struct SqlitePreferenceStore {
    pool: Arc<ConnectionPool>,
}

impl SqlitePreferenceStore {
    /// Create a new SQLite preference store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a `UserPreference`
fn row_to_preference(row: &Row<'_>) -> Result<UserPreference, rusqlite::Error> {
    let user_id: String = row.get(0)?;
    let city_name: String = row.get(1)?;
    let latitude: f64 = row.get(2)?;
    let longitude: f64 = row.get(3)?;
    let updated_at_str: String = row.get(4)?;

    let location = GeoLocation::new(latitude, longitude).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Real, Box::new(e))
    })?;

    let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    Ok(UserPreference::restore(
        UserId::new(user_id),
        Place::new(city_name, location),
        updated_at,
    ))
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    #[instrument(skip(self), fields(user_id = %user))]
    async fn get(&self, user: &UserId) -> Result<Option<UserPreference>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let user_id = user.as_str().to_owned();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Store(e.to_string()))?;

            let preference = conn
                .query_row(
                    "SELECT user_id, city_name, latitude, longitude, updated_at
                     FROM user_preferences WHERE user_id = ?1",
                    [&user_id],
                    row_to_preference,
                )
                .optional()
                .map_err(|e| ApplicationError::Store(e.to_string()))?;

            debug!(found = preference.is_some(), "Retrieved user preference");
            Ok(preference)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, place), fields(user_id = %user, city = %place.name))]
    async fn upsert_default(&self, user: &UserId, place: &Place) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let user_id = user.as_str().to_owned();
        let city_name = place.name.clone();
        let latitude = place.location.latitude();
        let longitude = place.location.longitude();
        let now = Utc::now().to_rfc3339();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Store(e.to_string()))?;

            conn.execute(
                "INSERT INTO user_preferences (user_id, city_name, latitude, longitude, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(user_id) DO UPDATE SET
                     city_name = excluded.city_name,
                     latitude = excluded.latitude,
                     longitude = excluded.longitude,
                     updated_at = excluded.updated_at",
                params![user_id, city_name, latitude, longitude, now],
            )
            .map_err(|e| ApplicationError::Store(e.to_string()))?;

            debug!("Saved user preference");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
