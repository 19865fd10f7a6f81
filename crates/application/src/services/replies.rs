//! User-visible reply texts
//!
//! Every expected failure maps to exactly one fixed sentence here; the
//! chat service and session flow share them so tests can assert on the
//! precise wording.

/// Greeting for the start command
pub const WELCOME: &str = "I'm simple weather bot. Powered by OpenWeatherMap data.\n\
    Type /help to get list of commands";

/// Help text listing the two usage modes
pub const HELP: &str = "I can work in two modes: for your city and for every other:\n\
    • Tell me your home city with /set command, and use /current, /day or /week commands \
    to get current weather, weather for a day or week respectfully.\n\
    • Use /current, /day or /week commands with some city name to get weather for that city.\n\
    Type /help to get this message again.";

/// Geocoding returned no candidates
pub const LOCATION_NOT_FOUND: &str =
    "This location could not be found in OpenWeatherMap database";

/// Geocoding failed while a city-name answer was expected; the dialog stays open
pub const LOCATION_NOT_FOUND_TRY_AGAIN: &str =
    "This location could not be found in OpenWeatherMap database.\n\
     Send another city name or /cancel";

/// No stored city and none given
pub const NO_DEFAULT_CITY: &str =
    "To use this command like this you should tell me your city first with /set command.\n\
     Or try using this command with some city name.\n\
     If you are using bot in group chat, do not forget to initialize bot with /start.";

/// The provider could not be reached
pub const NO_CONNECTION: &str = "No connection to OpenWeatherMap";

/// Prompt opening the default-city dialog
pub const CITY_PROMPT: &str = "What is your city?";

/// Dialog aborted
pub const CANCELLED: &str = "Action cancelled";

/// Cancel command received outside of a dialog
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel";

/// A command arrived while a city-name answer was expected
pub const FINISH_DIALOG_FIRST: &str =
    "Finish setting your city first: send a city name or /cancel";

/// Unrecognized command
pub const UNKNOWN_COMMAND: &str =
    "This command is incorrect, type /help to get list of commands";

/// Free text outside of any dialog
pub const NOT_A_COMMAND: &str = "I don't understand this, try using some commands";

/// Internal rendering failure; never exposes the underlying error
pub const REPORT_FAILED: &str =
    "Something went wrong while building your report, try again later";

/// Confirmation after a default city was committed
#[must_use]
pub fn city_set(name: &str) -> String {
    format!("Your city is set to {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_set_embeds_name() {
        assert_eq!(city_set("Kyiv"), "Your city is set to Kyiv");
    }

    #[test]
    fn no_default_city_keeps_group_chat_hint() {
        assert!(NO_DEFAULT_CITY.ends_with(
            "If you are using bot in group chat, do not forget to initialize bot with /start."
        ));
    }
}
