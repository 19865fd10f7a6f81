//! Application services

mod chat_service;
mod forecast_service;
mod location_resolver;
pub mod replies;
pub mod report;
mod session_flow;

pub use chat_service::ChatService;
pub use forecast_service::{FetchError, ForecastService};
pub use location_resolver::{LocationResolver, ResolutionOutcome};
pub use session_flow::SessionFlow;
