//! Value objects - Immutable domain primitives

mod geo_location;
mod user_id;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use user_id::UserId;
