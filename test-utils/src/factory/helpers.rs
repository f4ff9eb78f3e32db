//! Shared helper utilities for factory methods.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

/// Placeholder stored when a test does not care about the credential.
///
/// It is not a valid PHC string, so logins against it always fail.
pub const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a plaintext password the same way the server stores credentials.
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `String` - Argon2 PHC string
pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .unwrap_or_else(|_| UNUSABLE_PASSWORD_HASH.to_string())
}
