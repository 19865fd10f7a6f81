//! Application-level errors
//!
//! Expected request outcomes (location not found, no default configured,
//! provider unreachable) are modeled as tagged results, not errors; this
//! enum covers the hard failures that have no user-recoverable path.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Preference or session store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
