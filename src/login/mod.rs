//! Login pipeline.
//!
//! [`LoginService`] turns a client's credentials into the session, world and
//! character list the client needs to connect to the game server.

mod rules;
mod service;
mod types;

pub use rules::{daily_reward_state, premium_expiry, vocation_name, SECONDS_PER_DAY};
pub use service::LoginService;
pub use types::{
    CharacterSummary, LoginError, LoginOutcome, LoginRequest, SessionDescriptor, SessionStatus,
    WorldDescriptor,
};
