//! Bearer token issuing and validation (HS256 JWT).

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::enums::Role,
};

/// Claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Row id of the identity in its role's table.
    pub sub: i32,
    /// `"admin"`, `"coach"` or `"player"`.
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing material plus the token lifetime shared by all roles.
///
/// Cheap to clone; the keys live behind an `Arc`.
#[derive(Clone)]
pub struct TokenKeys {
    inner: Arc<Keys>,
    ttl_seconds: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Creates keys from the HMAC secret.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret, never empty (enforced by `Config`)
    /// - `ttl_seconds` - Lifetime of every issued token
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            inner: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            ttl_seconds,
        }
    }

    /// Issues a signed token for an identity.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::TokenErr)` - Signing failed
    pub fn issue(&self, sub: i32, role: Role) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub,
            role: role.as_str().to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.inner.encoding,
        )?)
    }

    /// Validates signature and expiry and resolves the role claim.
    ///
    /// # Returns
    /// - `Ok((sub, Role))` - Token valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or unknown role
    pub fn verify(&self, token: &str) -> Result<(i32, Role), AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.inner.decoding, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        let role = data
            .claims
            .role
            .parse::<Role>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok((data.claims.sub, role))
    }
}
