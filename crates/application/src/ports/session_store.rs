//! Session storage port
//!
//! Defines the interface for per-user conversation state. State is keyed
//! by user and never shared across users; implementations may be volatile
//! (losing pending dialogs on restart is an accepted trade-off).

use async_trait::async_trait;
use domain::{ConversationState, UserId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for conversation state storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the user's current state (`Idle` when none is stored)
    async fn get(&self, user: &UserId) -> Result<ConversationState, ApplicationError>;

    /// Replace the user's state
    async fn set(
        &self,
        user: &UserId,
        state: ConversationState,
    ) -> Result<(), ApplicationError>;
}
