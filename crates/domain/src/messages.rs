//! Incoming messages - Strongly typed representations of dispatcher input
//!
//! The chat transport parses raw commands and delivers one of these
//! variants per message, tagged with a stable user id. The core never
//! touches transport details.

use serde::{Deserialize, Serialize};

/// Which report variant the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Current conditions
    Current,
    /// Next 24 hours, hour by hour
    Day,
    /// Next 7 days, day by day
    Week,
}

/// One message as delivered by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IncomingMessage {
    /// Greeting command
    Start,

    /// Help command
    Help,

    /// A weather report request, optionally carrying an explicit city name
    Report {
        /// Report variant
        kind: ReportKind,
        /// Explicit city name, if the command carried one
        city: Option<String>,
    },

    /// Begin the default-city dialog
    SetDefaultCity,

    /// Abort the default-city dialog
    Cancel,

    /// An unrecognized command (leading slash, unknown name)
    UnknownCommand {
        /// The original input
        input: String,
    },

    /// Arbitrary free text; interpreted as a city-name answer only while
    /// the user's conversation state is `AwaitingCityName`
    Text {
        /// The message text
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_message_serializes_with_tag() {
        let msg = IncomingMessage::Report {
            kind: ReportKind::Current,
            city: Some("Kyiv".to_string()),
        };
        let json = serde_json::to_string(&msg).expect("serialize");
        assert!(json.contains("\"type\":\"report\""));
        assert!(json.contains("\"current\""));
    }

    #[test]
    fn text_message_round_trips() {
        let msg = IncomingMessage::Text {
            text: "hello".to_string(),
        };
        let json = serde_json::to_string(&msg).expect("serialize");
        let parsed: IncomingMessage = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(msg, parsed);
    }
}
