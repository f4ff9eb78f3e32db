//! Login for the three account types.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{admin::AdminRepository, coach::CoachRepository, player::PlayerRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginParams, LoginResult},
        enums::Role,
    },
    util::{password::verify_password, token::TokenKeys},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials against the role's table and issues a token.
    ///
    /// An unknown username, a wrong password and a player without stored credentials
    /// all produce the same error.
    ///
    /// # Arguments
    /// - `role` - Account type the login endpoint serves
    /// - `params` - Username and password
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Token plus the identity's role and id
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, role: Role, params: LoginParams) -> Result<LoginResult, AppError> {
        let stored: Option<(i32, String)> = match role {
            Role::Admin => AdminRepository::new(self.db)
                .find_by_username(&params.username)
                .await?
                .map(|admin| (admin.id, admin.password_hash)),
            Role::Coach => CoachRepository::new(self.db)
                .find_by_username(&params.username)
                .await?
                .map(|coach| (coach.id, coach.password_hash)),
            Role::Player => PlayerRepository::new(self.db)
                .find_by_username(&params.username)
                .await?
                .and_then(|player| player.password_hash.map(|hash| (player.id, hash))),
        };

        let Some((id, password_hash)) = stored else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(id, role)?;

        tracing::info!("{} {} logged in", role, id);

        Ok(LoginResult { token, role, id })
    }
}
