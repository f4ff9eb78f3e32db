//! Coach factory for creating test coach entities.

use crate::factory::helpers::{hash_password, next_id, UNUSABLE_PASSWORD_HASH};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test coaches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let coach = CoachFactory::new(&db)
///     .first_name("Rahul")
///     .specialty("Bowling")
///     .build()
///     .await?;
/// ```
pub struct CoachFactory<'a> {
    db: &'a DatabaseConnection,
    coach_id: String,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    specialty: String,
    experience_years: i32,
    email_address: String,
    status: String,
}

impl<'a> CoachFactory<'a> {
    /// Creates a new CoachFactory with default values.
    ///
    /// Defaults:
    /// - coach_id: `"TCCH{id}"` where id is auto-incremented
    /// - username: `"coach_{id}"`
    /// - first_name / last_name: `"Coach"` / `"{id}"`
    /// - specialty: `"Batting"`
    /// - experience_years: `5`
    /// - status: `"Active"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            coach_id: format!("TCCH{}", id),
            username: format!("coach_{}", id),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
            first_name: "Coach".to_string(),
            last_name: id.to_string(),
            specialty: "Batting".to_string(),
            experience_years: 5,
            email_address: format!("coach{}@academy.test", id),
            status: "Active".to_string(),
        }
    }

    /// Sets the external coach id.
    pub fn coach_id(mut self, coach_id: impl Into<String>) -> Self {
        self.coach_id = coach_id.into();
        self
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

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the specialty.
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Sets the account status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the coach entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::coach::Model)` - Created coach entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::coach::Model, DbErr> {
        entity::coach::ActiveModel {
            id: ActiveValue::NotSet,
            coach_id: ActiveValue::Set(self.coach_id),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            specialty: ActiveValue::Set(self.specialty),
            experience_years: ActiveValue::Set(self.experience_years),
            email_address: ActiveValue::Set(self.email_address),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a coach with default values.
///
/// Shorthand for `CoachFactory::new(db).build().await`.
pub async fn create_coach(db: &DatabaseConnection) -> Result<entity::coach::Model, DbErr> {
    CoachFactory::new(db).build().await
}
