//! Conversation state for the default-city dialog
//!
//! A user is in at most one state at a time. Entering `AwaitingCityName`
//! is the only way a subsequent free-text message is interpreted as a
//! city-name answer instead of an ordinary chat message.

use serde::{Deserialize, Serialize};

/// Per-user conversation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// No dialog in progress
    #[default]
    Idle,
    /// The set-default prompt was sent; the next free-text message is a
    /// city-name answer
    AwaitingCityName,
}

impl ConversationState {
    /// Check whether a city-name answer is expected
    #[must_use]
    pub const fn is_awaiting_city_name(&self) -> bool {
        matches!(self, Self::AwaitingCityName)
    }
}
