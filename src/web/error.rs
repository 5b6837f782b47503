//! Error replies sent to the game client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::login::LoginError;

/// Error code for a rejected login.
pub const ERROR_CODE_INVALID_CREDENTIALS: i64 = 3;
/// Error code for every other failure.
pub const ERROR_CODE_GENERIC: i64 = 1;

/// Error body understood by the client.
///
/// Sent with status 200: the client reads the body and shows the message,
/// while any other status produces a generic connection error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientError {
    pub error_code: i64,
    pub error_message: &'static str,
}

impl ClientError {
    const fn new(error_code: i64, error_message: &'static str) -> Self {
        Self {
            error_code,
            error_message,
        }
    }

    /// Unknown email or wrong password.
    pub const fn invalid_credentials() -> Self {
        Self::new(ERROR_CODE_INVALID_CREDENTIALS, "Invalid email or password.")
    }

    /// Server-side failure.
    pub const fn internal() -> Self {
        Self::new(ERROR_CODE_GENERIC, "Internal error.")
    }

    /// The body could not be decoded.
    pub const fn ill_formed() -> Self {
        Self::new(ERROR_CODE_GENERIC, "Ill-formed request.")
    }

    /// The request type is not one the server handles.
    pub const fn invalid_request() -> Self {
        Self::new(ERROR_CODE_GENERIC, "Invalid request.")
    }
}

impl From<LoginError> for ClientError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => ClientError::invalid_credentials(),
            LoginError::InternalError => ClientError::internal(),
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code, self.error_message)
    }
}

impl std::error::Error for ClientError {}
