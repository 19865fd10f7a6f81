//! Command dispatcher
//!
//! Parses raw input lines into typed messages. Anything starting with a
//! slash is a command; report commands may carry a trailing city name.
//! Free text passes through untouched so the dialog flow can interpret
//! it.

use domain::{IncomingMessage, ReportKind};

/// Parse one raw input line into a message
#[must_use]
pub fn parse_message(input: &str) -> IncomingMessage {
    let trimmed = input.trim();

    if !trimmed.starts_with('/') {
        return IncomingMessage::Text {
            text: trimmed.to_string(),
        };
    }

    let (command, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(cmd, rest)| (cmd, rest.trim()));

    let city = || {
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    };

    match command {
        "/start" => IncomingMessage::Start,
        "/help" => IncomingMessage::Help,
        "/current" => IncomingMessage::Report {
            kind: ReportKind::Current,
            city: city(),
        },
        "/day" => IncomingMessage::Report {
            kind: ReportKind::Day,
            city: city(),
        },
        "/week" => IncomingMessage::Report {
            kind: ReportKind::Week,
            city: city(),
        },
        "/set" => IncomingMessage::SetDefaultCity,
        "/cancel" => IncomingMessage::Cancel,
        _ => IncomingMessage::UnknownCommand {
            input: trimmed.to_string(),
        },
    }
}
