//! Domain entities

mod place;
mod preference;
mod session;

pub use place::Place;
pub use preference::UserPreference;
pub use session::ConversationState;
