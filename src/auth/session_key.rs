//! Session keys handed to the client after a successful login.

use serde::Deserialize;

/// How the session key in the login response is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKeyScheme {
    /// `email + "\n" + password`.
    ///
    /// This is what the stock game server parses when the client connects,
    /// so it stays the default until the game server accepts real tokens.
    #[default]
    Credentials,
    /// A random token that reveals nothing about the account.
    Opaque,
}

impl SessionKeyScheme {
    /// Issue a session key for a freshly authenticated account.
    pub fn issue(&self, email: &str, password: &str) -> String {
        match self {
            SessionKeyScheme::Credentials => format!("{email}\n{password}"),
            SessionKeyScheme::Opaque => uuid::Uuid::new_v4().simple().to_string(),
        }
    }
}
