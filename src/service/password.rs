//! Storage form for credentials on the hashed registration path.
//!
//! Argon2id with the crate's default parameters, a fresh 16-byte salt per call
//! and PHC string output, so the stored value carries everything `verify` needs.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;

/// Upper bound on plaintext length, in characters.
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Password cannot be empty")]
    Empty,

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Hash `plaintext` into a self-describing PHC string.
pub fn hash(plaintext: &str) -> Result<String, PolicyError> {
    if plaintext.is_empty() {
        return Err(PolicyError::Empty);
    }
    let actual = plaintext.chars().count();
    if actual > MAX_PASSWORD_LENGTH {
        return Err(PolicyError::TooLong {
            max: MAX_PASSWORD_LENGTH,
            actual,
        });
    }

    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| PolicyError::HashingFailed(e.to_string()))?;
    Ok(hashed.to_string())
}

/// Check `plaintext` against a stored form. Malformed stored forms never match.
pub fn verify(plaintext: &str, stored_form: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_form) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}
