//! Handlers for the client endpoint.

pub mod login;
pub mod status;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::config::Config;
use crate::db::{AccountStore, StatusStore};
use crate::events::EventCalendar;
use crate::login::LoginService;
use crate::web::dto::ClientRequest;

/// Application state shared across handlers.
pub struct AppState<S> {
    /// Login pipeline, which also owns the store.
    pub login: LoginService<S>,
    /// Event calendar.
    pub events: EventCalendar,
}

impl<S: AccountStore + StatusStore> AppState<S> {
    /// Create a new application state.
    pub fn new(login: LoginService<S>, events: EventCalendar) -> Self {
        Self { login, events }
    }

    /// Build the state for `store` from the full configuration.
    pub fn from_config(store: S, config: &Config) -> Self {
        Self::new(
            LoginService::from_config(store, config),
            EventCalendar::new(config.events.clone()),
        )
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        self.login.store()
    }
}

/// POST /login.php - Every client request.
///
/// The client sends all request kinds to the same URL and tells them apart
/// by the `type` field.
pub async fn client_request<S: AccountStore + StatusStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Response {
    let request = match ClientRequest::decode(&body) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    let state: &AppState<S> = &state;
    match request {
        ClientRequest::Login(request) => login::login(state, &request).await.into_response(),
        ClientRequest::BoostedCreature => status::boosted_creature(state).await.into_response(),
        ClientRequest::CacheInfo => status::cache_info(state).await.into_response(),
        ClientRequest::EventSchedule => status::event_schedule(state).into_response(),
    }
}

/// Any other path or method.
///
/// Answers with an empty body instead of a 404 page.
pub async fn fallback() -> impl IntoResponse {}

/// GET /health - Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
