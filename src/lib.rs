//! Kaplar Login - login gateway for the game client
//!
//! Authenticates account credentials over HTTP, lists the account's
//! characters and hands the client the session and world it needs to
//! connect to the game server.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod logging;
pub mod login;
pub mod web;

pub use auth::{hash_password, verify_password, HashAlgorithm, PasswordError, SessionKeyScheme};
pub use config::Config;
pub use db::{AccountStore, Database, StatusStore};
pub use error::{KaplarError, Result};
pub use events::EventCalendar;
pub use login::{LoginError, LoginOutcome, LoginRequest, LoginService};
pub use web::{AppState, WebServer};
