//! Authentication module.
//!
//! Password verification against stored account hashes and the session
//! keys issued after a successful login.

mod password;
mod session_key;

pub use password::{constant_time_eq, hash_password, verify_password, HashAlgorithm, PasswordError};
pub use session_key::SessionKeyScheme;
