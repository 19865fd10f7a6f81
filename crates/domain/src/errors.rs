//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::GeoLocation;

    #[test]
    fn invalid_coordinates_convert() {
        let err = GeoLocation::new(120.0, 0.0).unwrap_err();
        let domain_err: DomainError = err.into();
        assert!(domain_err.to_string().contains("latitude"));
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::Validation("empty city name".to_string());
        assert_eq!(err.to_string(), "Validation failed: empty city name");
    }
}
