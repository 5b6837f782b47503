//! Server status handlers: boosted creature, player count and events.
//!
//! These requests arrive before the client logs in and never fail: a store
//! error is logged and answered with a placeholder value.

use axum::Json;

use super::AppState;
use crate::db::{AccountStore, StatusStore, DEFAULT_BOOSTED_RACE_ID};
use crate::web::dto::{BoostedCreatureResponse, CacheInfoResponse, EventScheduleResponse};

/// Boosted creature of the day.
pub async fn boosted_creature<S: AccountStore + StatusStore>(
    state: &AppState<S>,
) -> Json<BoostedCreatureResponse> {
    let response = match state.store().boosted_race_id().await {
        Ok(Some(race_id)) => BoostedCreatureResponse {
            boosted_creature: true,
            race_id,
        },
        Ok(None) => {
            tracing::warn!("No boosted creature set");
            BoostedCreatureResponse {
                boosted_creature: false,
                race_id: DEFAULT_BOOSTED_RACE_ID,
            }
        }
        Err(e) => {
            tracing::warn!("Failed to load boosted creature: {}", e);
            BoostedCreatureResponse {
                boosted_creature: false,
                race_id: DEFAULT_BOOSTED_RACE_ID,
            }
        }
    };
    Json(response)
}

/// Online player count.
pub async fn cache_info<S: AccountStore + StatusStore>(
    state: &AppState<S>,
) -> Json<CacheInfoResponse> {
    let players_online = state.store().count_online_players().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to count online players: {}", e);
        0
    });
    Json(CacheInfoResponse::new(players_online))
}

/// Event calendar.
pub fn event_schedule<S>(state: &AppState<S>) -> Json<EventScheduleResponse> {
    Json(EventScheduleResponse::from(state.events.schedule()))
}
