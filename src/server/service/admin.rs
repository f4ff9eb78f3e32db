//! Admin account management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin::AdminRepository,
    error::AppError,
    model::admin::{Admin, CreateAdminParams},
    util::password::hash_password,
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an admin account.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The created admin
    /// - `Err(AppError::BadRequest)` - Username already taken
    /// - `Err(AppError::PasswordErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_admin(&self, params: CreateAdminParams) -> Result<Admin, AppError> {
        let repo = AdminRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Username '{}' is already taken",
                params.username
            )));
        }

        let password_hash = hash_password(&params.password)?;
        let admin = repo.create(params.username, password_hash).await?;

        tracing::info!("Created admin {}", admin.username);

        Ok(admin)
    }

    /// Creates the first admin when the table is empty.
    ///
    /// # Returns
    /// - `Ok(Some(Admin))` - Bootstrap admin created
    /// - `Ok(None)` - An admin already exists; nothing was done
    /// - `Err(AppError)` - Validation, hashing or database error
    pub async fn ensure_bootstrap_admin(
        &self,
        params: CreateAdminParams,
    ) -> Result<Option<Admin>, AppError> {
        if AdminRepository::new(self.db).any_exists().await? {
            return Ok(None);
        }

        self.create_admin(params).await.map(Some)
    }
}
