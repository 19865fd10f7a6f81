//! Domain layer for the weather bot core
//!
//! Contains the entities, value objects, and incoming-message model shared
//! by all other layers. This layer has no I/O dependencies and defines the
//! ubiquitous language.

pub mod entities;
pub mod errors;
pub mod messages;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use messages::{IncomingMessage, ReportKind};
pub use value_objects::*;
