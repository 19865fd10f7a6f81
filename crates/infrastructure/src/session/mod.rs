//! Session state storage
//!
//! In-memory implementation of the `SessionStore` port. Conversation
//! state is a short-lived dialog flag, so it is deliberately volatile: a
//! restart drops any open dialog and the user simply re-issues the
//! command.

use std::collections::HashMap;

use application::{error::ApplicationError, ports::SessionStore};
use async_trait::async_trait;
use domain::{ConversationState, UserId};
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// In-memory session store keyed by user id
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    states: RwLock<HashMap<UserId, ConversationState>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    #[instrument(skip(self), fields(user_id = %user))]
    async fn get(&self, user: &UserId) -> Result<ConversationState, ApplicationError> {
        let state = self
            .states
            .read()
            .get(user)
            .copied()
            .unwrap_or_default();
        Ok(state)
    }

    #[instrument(skip(self), fields(user_id = %user))]
    async fn set(&self, user: &UserId, state: ConversationState) -> Result<(), ApplicationError> {
        // Idle rows are pruned instead of stored so the map only holds
        // users with an open dialog.
        let mut states = self.states.write();
        if state == ConversationState::Idle {
            states.remove(user);
        } else {
            states.insert(user.clone(), state);
        }
        debug!(?state, "Session state updated");
        Ok(())
    }
}
