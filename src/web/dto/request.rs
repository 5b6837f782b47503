//! Request decoding for the client endpoint.

use serde::Deserialize;

use crate::login::LoginRequest;
use crate::web::error::ClientError;

/// Body of `POST /login.php` as sent by the client.
///
/// Every request kind shares this shape; only `type` is always present.
#[derive(Debug, Default, Deserialize)]
pub struct RawClientRequest {
    /// Request kind.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Login email.
    #[serde(default)]
    pub email: Option<String>,
    /// Login password.
    #[serde(default)]
    pub password: Option<String>,
    /// "Stay logged in" checkbox. Accepted and ignored.
    #[serde(default)]
    pub stayloggedin: Option<bool>,
}

/// A decoded client request.
#[derive(Debug, PartialEq, Eq)]
pub enum ClientRequest {
    Login(LoginRequest),
    BoostedCreature,
    CacheInfo,
    EventSchedule,
}

impl ClientRequest {
    /// Decode a request body.
    ///
    /// A body that is not a JSON object of the expected shape is ill-formed;
    /// a well-formed body with an unknown `type` is an invalid request.
    pub fn decode(body: &[u8]) -> Result<Self, ClientError> {
        let raw: RawClientRequest = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Failed to decode client request: {}", e);
            ClientError::ill_formed()
        })?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawClientRequest> for ClientRequest {
    type Error = ClientError;

    fn try_from(raw: RawClientRequest) -> Result<Self, Self::Error> {
        match raw.kind.as_deref() {
            Some("login") => Ok(ClientRequest::Login(LoginRequest::new(
                raw.email.unwrap_or_default(),
                raw.password.unwrap_or_default(),
            ))),
            Some("boostedcreature") => Ok(ClientRequest::BoostedCreature),
            Some("cacheinfo") => Ok(ClientRequest::CacheInfo),
            Some("eventschedule") => Ok(ClientRequest::EventSchedule),
            other => {
                tracing::debug!("Unknown client request type: {:?}", other);
                Err(ClientError::invalid_request())
            }
        }
    }
}
