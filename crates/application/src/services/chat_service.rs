//! Chat service
//!
//! Entry point for every incoming message. Routes by conversation state
//! first (an open default-city dialog captures free text and commands),
//! then dispatches idle-state commands. Every expected failure becomes a
//! fixed reply; `Err` is reserved for store and internal defects.

use std::sync::Arc;

use domain::{IncomingMessage, ReportKind, UserId};
use tracing::{error, info, instrument};

use crate::error::ApplicationError;
use crate::ports::SessionStore;
use crate::services::{
    replies, report, FetchError, ForecastService, LocationResolver, ResolutionOutcome, SessionFlow,
};

/// Handles one incoming message end to end
#[derive(Clone)]
pub struct ChatService {
    resolver: LocationResolver,
    forecasts: ForecastService,
    flow: SessionFlow,
    sessions: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService").finish_non_exhaustive()
    }
}

impl ChatService {
    /// Compose the service from its collaborators
    pub fn new(
        resolver: LocationResolver,
        forecasts: ForecastService,
        flow: SessionFlow,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            resolver,
            forecasts,
            flow,
            sessions,
        }
    }

    /// Handle one message and produce the reply text
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` for store failures; provider outages and
    /// every other expected condition map to a reply instead.
    #[instrument(skip(self, message), fields(user = %user))]
    pub async fn handle(
        &self,
        user: &UserId,
        message: IncomingMessage,
    ) -> Result<String, ApplicationError> {
        let state = self.sessions.get(user).await?;

        if state.is_awaiting_city_name() {
            return match message {
                IncomingMessage::Cancel => self.flow.cancel(user).await,
                IncomingMessage::Text { text } => self.flow.answer(user, &text).await,
                _ => Ok(replies::FINISH_DIALOG_FIRST.to_string()),
            };
        }

        match message {
            IncomingMessage::Start => Ok(replies::WELCOME.to_string()),
            IncomingMessage::Help => Ok(replies::HELP.to_string()),
            IncomingMessage::Report { kind, city } => {
                self.report(user, kind, city.as_deref()).await
            },
            IncomingMessage::SetDefaultCity => self.flow.begin(user).await,
            IncomingMessage::Cancel => Ok(replies::NOTHING_TO_CANCEL.to_string()),
            IncomingMessage::UnknownCommand { input } => {
                info!(%input, "Unknown command");
                Ok(replies::UNKNOWN_COMMAND.to_string())
            },
            IncomingMessage::Text { .. } => Ok(replies::NOT_A_COMMAND.to_string()),
        }
    }

    /// Resolve, fetch, and render one report
    async fn report(
        &self,
        user: &UserId,
        kind: ReportKind,
        city: Option<&str>,
    ) -> Result<String, ApplicationError> {
        let place = match self.resolver.resolve(city, user).await? {
            ResolutionOutcome::Resolved(place) => place,
            ResolutionOutcome::NotFound => return Ok(replies::LOCATION_NOT_FOUND.to_string()),
            ResolutionOutcome::NoDefaultConfigured => {
                return Ok(replies::NO_DEFAULT_CITY.to_string());
            },
            ResolutionOutcome::ProviderUnavailable => {
                return Ok(replies::NO_CONNECTION.to_string());
            },
        };

        let bundle = match self.forecasts.fetch(place.location).await {
            Ok(bundle) => bundle,
            Err(FetchError::ProviderUnavailable) => {
                return Ok(replies::NO_CONNECTION.to_string());
            },
        };

        let name = self
            .forecasts
            .display_name(place.location, Some(&place.name))
            .await;

        let rendered = match kind {
            ReportKind::Current => report::render_current(&bundle, &name),
            ReportKind::Day => report::render_day(&bundle, &name),
            ReportKind::Week => report::render_week(&bundle, &name),
        };

        match rendered {
            Ok(text) => Ok(text),
            Err(e) => {
                error!(error = %e, "Report rendering failed");
                Ok(replies::REPORT_FAILED.to_string())
            },
        }
    }
}
