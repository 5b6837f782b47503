//! Login pipeline: account lookup, credential check, character listing and
//! session assembly.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use super::rules::premium_expiry;
use super::types::{
    CharacterSummary, LoginError, LoginOutcome, LoginRequest, SessionDescriptor, SessionStatus,
    WorldDescriptor,
};
use crate::auth::{HashAlgorithm, SessionKeyScheme};
use crate::config::{Config, WorldConfig};
use crate::db::AccountStore;

/// Authenticates accounts against an [`AccountStore`].
///
/// Holds no per-request state, so one instance is shared by every handler.
pub struct LoginService<S> {
    store: S,
    hash_algorithm: HashAlgorithm,
    session_keys: SessionKeyScheme,
    world: WorldDescriptor,
}

impl<S: AccountStore> LoginService<S> {
    /// Create a service with the default hash algorithm and session keys.
    pub fn new(store: S, world: &WorldConfig) -> Self {
        Self {
            store,
            hash_algorithm: HashAlgorithm::default(),
            session_keys: SessionKeyScheme::default(),
            world: WorldDescriptor::from(world),
        }
    }

    /// Create a service from the `[auth]` and `[world]` sections.
    pub fn from_config(store: S, config: &Config) -> Self {
        Self::new(store, &config.world)
            .with_hash_algorithm(config.auth.hash_algorithm)
            .with_session_keys(config.auth.session_key)
    }

    /// Set the algorithm stored password hashes are checked with.
    pub fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }

    /// Set how session keys are issued.
    pub fn with_session_keys(mut self, scheme: SessionKeyScheme) -> Self {
        self.session_keys = scheme;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Authenticate `request` and assemble the client's session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, LoginError> {
        self.login_at(request, Utc::now()).await
    }

    /// Like [`login`](Self::login), with premium expiry computed relative to `now`.
    pub async fn login_at(
        &self,
        request: &LoginRequest,
        now: DateTime<Utc>,
    ) -> Result<LoginOutcome, LoginError> {
        let account = match self.store.find_account_by_email(&request.email).await {
            Ok(account) => account,
            Err(e) => {
                warn!("Account lookup failed for {:?}: {}", request.email, e);
                None
            }
        };

        // Unknown accounts are checked against a decoy so both rejections take as long
        let stored_hash = account
            .as_ref()
            .map_or(self.hash_algorithm.decoy_hash(), |a| a.password_hash.as_str());
        let verified = self.hash_algorithm.verify(&request.password, stored_hash);

        let account = match account {
            Some(account) if verified => account,
            Some(_) => {
                info!("Login failed for {:?}: wrong password", request.email);
                return Err(LoginError::InvalidCredentials);
            }
            None => {
                info!("Login failed for {:?}: unknown account", request.email);
                return Err(LoginError::InvalidCredentials);
            }
        };

        let records = self
            .store
            .list_characters_by_account(account.id)
            .await
            .map_err(|e| {
                error!("Character lookup failed for account {}: {}", account.id, e);
                LoginError::InternalError
            })?;

        let mut last_login = 0;
        let mut characters = Vec::with_capacity(records.len());
        for record in records {
            last_login = last_login.max(record.last_login);
            characters.push(CharacterSummary::from_record(record, self.world.id));
        }

        let premium_until = premium_expiry(account.premium_days, now);
        let session = SessionDescriptor {
            session_key: self.session_keys.issue(&request.email, &request.password),
            status: SessionStatus::Active,
            last_login,
            premium_until,
            is_premium: premium_until > 0,
        };

        debug!(
            "Login succeeded for {:?} with {} character(s)",
            request.email,
            characters.len()
        );

        Ok(LoginOutcome {
            session,
            worlds: [self.world.clone()],
            characters,
        })
    }
}
