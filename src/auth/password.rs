//! Password verification for stored account hashes.
//!
//! The game server's account table stores unsalted hex digests (SHA-1 by
//! default). Argon2id PHC strings are supported for deployments that have
//! migrated their accounts. Exactly one algorithm is active per deployment,
//! selected with `auth.hash_algorithm`.

use std::fmt;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),
}

/// Hash algorithm used for stored account passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Hex-encoded SHA-1 digest.
    #[default]
    Sha1,
    /// Hex-encoded SHA-256 digest.
    Sha256,
    /// Argon2 PHC string.
    Argon2,
}

impl HashAlgorithm {
    /// Configuration name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Argon2 => "argon2",
        }
    }

    /// Check `password` against `stored_hash`.
    ///
    /// Never fails: a stored hash that cannot be decoded is reported the
    /// same way as a wrong password.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match self {
            HashAlgorithm::Sha1 => verify_digest::<Sha1>(password, stored_hash),
            HashAlgorithm::Sha256 => verify_digest::<Sha256>(password, stored_hash),
            HashAlgorithm::Argon2 => verify_argon2(password, stored_hash),
        }
    }

    /// A well-formed stored hash that no password matches in practice.
    ///
    /// Verifying against it costs the same as verifying against a real
    /// account's hash, so a login for an unknown email takes as long as one
    /// with a wrong password. The argon2 form uses the same parameters as
    /// [`hash`](Self::hash).
    pub fn decoy_hash(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "0000000000000000000000000000000000000000",
            HashAlgorithm::Sha256 => {
                "0000000000000000000000000000000000000000000000000000000000000000"
            }
            HashAlgorithm::Argon2 => {
                "$argon2id$v=19$m=65536,t=3,p=4$a2FwbGFyZGVjb3lzYWx0$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
            }
        }
    }

    /// Produce the stored form of `password` for this algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaplar_login::HashAlgorithm;
    ///
    /// let hash = HashAlgorithm::Sha1.hash("secret").unwrap();
    /// assert_eq!(hash, "e5e9fa1ba31ecd1ae84f75caaa474f3a663f05f4");
    /// ```
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self {
            HashAlgorithm::Sha1 => Ok(hex::encode(Sha1::digest(password.as_bytes()))),
            HashAlgorithm::Sha256 => Ok(hex::encode(Sha256::digest(password.as_bytes()))),
            HashAlgorithm::Argon2 => hash_argon2(password),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verify a password against a stored hash with the given algorithm.
///
/// # Examples
///
/// ```
/// use kaplar_login::{hash_password, verify_password, HashAlgorithm};
///
/// let hash = hash_password(HashAlgorithm::Sha256, "my_password").unwrap();
/// assert!(verify_password(HashAlgorithm::Sha256, "my_password", &hash));
/// assert!(!verify_password(HashAlgorithm::Sha256, "wrong_password", &hash));
/// ```
pub fn verify_password(algorithm: HashAlgorithm, password: &str, stored_hash: &str) -> bool {
    algorithm.verify(password, stored_hash)
}

/// Hash a password with the given algorithm.
pub fn hash_password(algorithm: HashAlgorithm, password: &str) -> Result<String, PasswordError> {
    algorithm.hash(password)
}

fn verify_digest<D: Digest>(password: &str, stored_hash: &str) -> bool {
    let expected = match hex::decode(stored_hash) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let actual = D::digest(password.as_bytes());
    constant_time_eq(&actual, &expected)
}

/// Compare two byte slices without exiting early on the first mismatch.
///
/// Only the lengths are allowed to leak; digest lengths are public anyway.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    std::hint::black_box(diff) == 0
}

/// Argon2id with 64 MiB memory, 3 iterations, 4 lanes.
fn create_argon2() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(65536, 3, 4, None)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

fn hash_argon2(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = create_argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify_argon2(password: &str, stored_hash: &str) -> bool {
    // Parameters come from the PHC string, not from create_argon2()
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
