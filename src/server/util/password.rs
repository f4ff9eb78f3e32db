//! Password hashing and verification using Argon2id

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Error types for password operations
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerificationFailed(String),
}

/// Hash a password using Argon2id with the crate's default cost parameters.
///
/// # Returns
/// * `Ok(String)` - PHC-formatted hash string (suitable for storage)
/// * `Err(PasswordError)` - If hashing fails
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    Ok(password_hash.to_string())
}

/// Verify a password against a stored hash
///
/// A stored value that is not a PHC string never matches, so accounts seeded with a
/// placeholder cannot be logged into.
///
/// # Returns
/// * `Ok(true)` - Password matches hash
/// * `Ok(false)` - Password does not match, or the stored hash is unusable
/// * `Err(PasswordError)` - Verification failed for another reason
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return Ok(false);
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
    }
}
