//! Login handler.

use axum::Json;

use super::AppState;
use crate::db::{AccountStore, StatusStore};
use crate::login::LoginRequest;
use crate::web::dto::LoginResponse;
use crate::web::error::ClientError;

/// Authenticate the client and return its session and character list.
pub async fn login<S: AccountStore + StatusStore>(
    state: &AppState<S>,
    request: &LoginRequest,
) -> Result<Json<LoginResponse>, ClientError> {
    let outcome = state.login.login(request).await?;
    Ok(Json(LoginResponse::from(outcome)))
}
