//! Admin factory for creating test admin accounts.

use crate::factory::helpers::{hash_password, next_id, UNUSABLE_PASSWORD_HASH};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admins with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = AdminFactory::new(&db)
///     .username("root")
///     .password("hunter2")
///     .build()
///     .await?;
/// ```
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - username: `"admin_{id}"` where id is auto-incremented
    /// - password_hash: unusable placeholder
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("admin_{}", id),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
        }
    }

    /// Sets the login name.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Hashes and stores the given plaintext password.
    pub fn password(mut self, password: &str) -> Self {
        self.password_hash = hash_password(password);
        self
    }

    /// Builds and inserts the admin entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::admin::Model)` - Created admin entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
