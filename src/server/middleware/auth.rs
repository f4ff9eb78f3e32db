use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{admin::AdminRepository, coach::CoachRepository, player::PlayerRepository},
    error::{auth::AuthError, AppError},
    model::{admin::Admin, auth::Identity, coach::Coach, enums::Role, player::Player},
    util::token::TokenKeys,
};

/// Per-route role check backed by a bearer token.
///
/// The identity is re-read from the role's table on every request so that tokens
/// belonging to deleted accounts stop working immediately.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Authenticates the request's bearer token and checks its role.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying `Authorization: Bearer <token>`
    /// - `roles` - Roles allowed on the route
    ///
    /// # Returns
    /// - `Ok(Identity)` - The caller re-read from storage
    /// - `Err(AuthError::MissingToken)` - Header absent or not a bearer credential
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or unknown role claim
    /// - `Err(AuthError::AccessDenied)` - Role not in `roles`
    /// - `Err(AuthError::IdentityNotFound)` - Account no longer exists
    pub async fn require(&self, headers: &HeaderMap, roles: &[Role]) -> Result<Identity, AppError> {
        self.require_token(bearer_token(headers), roles).await
    }

    /// Requires an admin caller.
    pub async fn require_admin(&self, headers: &HeaderMap) -> Result<Admin, AppError> {
        match self.require(headers, &[Role::Admin]).await? {
            Identity::Admin(admin) => Ok(admin),
            _ => Err(AuthError::AccessDenied.into()),
        }
    }

    /// Requires a coach caller.
    pub async fn require_coach(&self, headers: &HeaderMap) -> Result<Coach, AppError> {
        match self.require(headers, &[Role::Coach]).await? {
            Identity::Coach(coach) => Ok(coach),
            _ => Err(AuthError::AccessDenied.into()),
        }
    }

    /// Requires a player caller.
    pub async fn require_player(&self, headers: &HeaderMap) -> Result<Player, AppError> {
        match self.require(headers, &[Role::Player]).await? {
            Identity::Player(player) => Ok(player),
            _ => Err(AuthError::AccessDenied.into()),
        }
    }

    /// Same as [`AuthGuard::require`] for a token obtained some other way.
    ///
    /// Used by the event stream, whose browser clients cannot set headers.
    pub async fn require_token(
        &self,
        token: Option<&str>,
        roles: &[Role],
    ) -> Result<Identity, AppError> {
        let Some(token) = token else {
            return Err(AuthError::MissingToken.into());
        };

        let (subject, role) = self.tokens.verify(token)?;

        if !roles.contains(&role) {
            return Err(AuthError::AccessDenied.into());
        }

        let identity = match role {
            Role::Admin => AdminRepository::new(self.db)
                .find_by_id(subject)
                .await?
                .map(Identity::Admin),
            Role::Coach => CoachRepository::new(self.db)
                .find_by_id(subject)
                .await?
                .map(Identity::Coach),
            Role::Player => PlayerRepository::new(self.db)
                .find_by_id(subject)
                .await?
                .map(Identity::Player),
        };

        identity.ok_or_else(|| AuthError::IdentityNotFound.into())
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
