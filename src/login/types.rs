//! Inputs, outputs and errors of the login pipeline.

use std::fmt;

use thiserror::Error;

use super::rules::{daily_reward_state, vocation_name};
use crate::config::WorldConfig;
use crate::db::CharacterRecord;

/// Credentials submitted by the client.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Why a login was refused.
///
/// Unknown email, wrong password and a failed account lookup are all
/// reported as `InvalidCredentials` so callers cannot probe for accounts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    /// Unknown email, wrong password, or account lookup failure.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Failure after the account was authenticated.
    #[error("internal error")]
    InternalError,
}

/// Account status shown by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Active,
    Frozen,
    Suspended,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Frozen => "frozen",
            SessionStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Session handed to the client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescriptor {
    /// Key the client presents to the game server.
    pub session_key: String,
    /// Account status.
    pub status: SessionStatus,
    /// Most recent last-login across the account's characters (0 if none).
    pub last_login: i64,
    /// Premium expiry as a unix timestamp (0 if not premium).
    pub premium_until: i64,
    /// Whether the account is premium.
    pub is_premium: bool,
}

/// A game world advertised to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldDescriptor {
    pub id: i64,
    pub name: String,
    pub external_address: String,
    pub external_port: u16,
    pub external_address_protected: String,
    pub external_port_protected: u16,
    pub external_address_unprotected: String,
    pub external_port_unprotected: u16,
    /// Region code (USA, EUR or BRA).
    pub location: String,
    /// PvP ruleset (pvp, no-pvp or pvp-enforced).
    pub pvp_type: String,
    pub anti_cheat_protection: bool,
    pub restricted_store: bool,
}

impl From<&WorldConfig> for WorldDescriptor {
    fn from(config: &WorldConfig) -> Self {
        Self {
            id: config.id,
            name: config.name.clone(),
            external_address: config.host.clone(),
            external_port: config.port,
            external_address_protected: config
                .protected_host
                .clone()
                .unwrap_or_else(|| config.host.clone()),
            external_port_protected: config.protected_port.unwrap_or(config.port),
            external_address_unprotected: config
                .unprotected_host
                .clone()
                .unwrap_or_else(|| config.host.clone()),
            external_port_unprotected: config.unprotected_port.unwrap_or(config.port),
            location: config.location.clone(),
            pvp_type: config.pvp_type.clone(),
            anti_cheat_protection: config.anti_cheat_protection,
            restricted_store: config.restricted_store,
        }
    }
}

/// A character as listed in the client's character list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSummary {
    pub world_id: i64,
    pub name: String,
    pub level: i64,
    /// Vocation display name.
    pub vocation: &'static str,
    pub look_type: i64,
    pub look_head: i64,
    pub look_body: i64,
    pub look_legs: i64,
    pub look_feet: i64,
    pub look_addons: i64,
    /// 1 if a daily reward is waiting, else 0.
    pub daily_reward_state: i64,
    pub is_male: bool,
    pub tutorial: bool,
    pub is_hidden: bool,
    pub is_main_character: bool,
}

impl CharacterSummary {
    /// Project a character row onto the world it is listed under.
    pub fn from_record(record: CharacterRecord, world_id: i64) -> Self {
        Self {
            world_id,
            vocation: vocation_name(record.vocation),
            daily_reward_state: daily_reward_state(record.pending_reward),
            is_male: record.is_male(),
            name: record.name,
            level: record.level,
            look_type: record.look_type,
            look_head: record.look_head,
            look_body: record.look_body,
            look_legs: record.look_legs,
            look_feet: record.look_feet,
            look_addons: record.look_addons,
            tutorial: record.tutorial,
            is_hidden: false,
            is_main_character: false,
        }
    }
}

/// Everything a successful login returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: SessionDescriptor,
    pub worlds: [WorldDescriptor; 1],
    /// One entry per character row, in store order.
    pub characters: Vec<CharacterSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CharacterRecord {
        CharacterRecord {
            name: "Hero".to_string(),
            level: 8,
            sex: 1,
            vocation: 7,
            look_type: 128,
            look_head: 78,
            look_body: 69,
            look_legs: 58,
            look_feet: 76,
            look_addons: 3,
            last_login: 100,
            pending_reward: true,
            tutorial: true,
        }
    }

    #[test]
    fn test_character_summary_from_record() {
        let summary = CharacterSummary::from_record(record(), 2);

        assert_eq!(summary.world_id, 2);
        assert_eq!(summary.name, "Hero");
        assert_eq!(summary.level, 8);
        assert_eq!(summary.vocation, "Royal Paladin");
        assert_eq!(summary.look_type, 128);
        assert_eq!(summary.look_head, 78);
        assert_eq!(summary.look_body, 69);
        assert_eq!(summary.look_legs, 58);
        assert_eq!(summary.look_feet, 76);
        assert_eq!(summary.look_addons, 3);
        assert_eq!(summary.daily_reward_state, 1);
        assert!(summary.is_male);
        assert!(summary.tutorial);
        assert!(!summary.is_hidden);
        assert!(!summary.is_main_character);
    }

    #[test]
    fn test_character_summary_female_no_reward() {
        let mut record = record();
        record.sex = 0;
        record.pending_reward = false;
        record.vocation = 99;

        let summary = CharacterSummary::from_record(record, 0);
        assert!(!summary.is_male);
        assert_eq!(summary.daily_reward_state, 0);
        assert_eq!(summary.vocation, "None");
    }

    #[test]
    fn test_world_descriptor_defaults_endpoints() {
        let config = WorldConfig::default();
        let world = WorldDescriptor::from(&config);

        assert_eq!(world.name, "Canary");
        assert_eq!(world.external_address, "localhost");
        assert_eq!(world.external_port, 7172);
        assert_eq!(world.external_address_protected, "localhost");
        assert_eq!(world.external_port_protected, 7172);
        assert_eq!(world.external_address_unprotected, "localhost");
        assert_eq!(world.external_port_unprotected, 7172);
        assert_eq!(world.location, "BRA");
        assert_eq!(world.pvp_type, "pvp");
    }

    #[test]
    fn test_world_descriptor_explicit_endpoints() {
        let config = WorldConfig {
            protected_host: Some("p.example.org".to_string()),
            protected_port: Some(7200),
            unprotected_port: Some(7300),
            ..WorldConfig::default()
        };
        let world = WorldDescriptor::from(&config);

        assert_eq!(world.external_address_protected, "p.example.org");
        assert_eq!(world.external_port_protected, 7200);
        assert_eq!(world.external_address_unprotected, "localhost");
        assert_eq!(world.external_port_unprotected, 7300);
    }

    #[test]
    fn test_session_status_strings() {
        assert_eq!(SessionStatus::default(), SessionStatus::Active);
        assert_eq!(SessionStatus::Active.to_string(), "active");
        assert_eq!(SessionStatus::Frozen.to_string(), "frozen");
        assert_eq!(SessionStatus::Suspended.to_string(), "suspended");
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        let request = LoginRequest::new("a@x.com", "secret");
        let debug = format!("{request:?}");
        assert!(debug.contains("a@x.com"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_login_error_display() {
        assert_eq!(
            LoginError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
        assert_eq!(LoginError::InternalError.to_string(), "internal error");
    }
}
