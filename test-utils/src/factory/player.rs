//! Player factory for creating test player entities.

use crate::factory::helpers::{hash_password, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Players are created without credentials unless `username` and `password` are set.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db)
///     .username("asha")
///     .password("secret")
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: String,
    username: Option<String>,
    password_hash: Option<String>,
    first_name: String,
    last_name: String,
    age: i32,
    role: String,
    academy_level: String,
    email_address: String,
    cricclubs_id: String,
    status: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - player_id: `"TPLR{id}"` where id is auto-incremented
    /// - username / password: none
    /// - first_name / last_name: `"Player"` / `"{id}"`
    /// - age: `16`
    /// - role: `"Batsman"`
    /// - academy_level: `"Beginner"`
    /// - status: `"Active"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            player_id: format!("TPLR{}", id),
            username: None,
            password_hash: None,
            first_name: "Player".to_string(),
            last_name: id.to_string(),
            age: 16,
            role: "Batsman".to_string(),
            academy_level: "Beginner".to_string(),
            email_address: format!("player{}@academy.test", id),
            cricclubs_id: format!("{}", 50_000 + id),
            status: "Active".to_string(),
        }
    }

    /// Sets the external player id.
    pub fn player_id(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = player_id.into();
        self
    }

    /// Sets the login name.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Hashes and stores the given plaintext password.
    pub fn password(mut self, password: &str) -> Self {
        self.password_hash = Some(hash_password(password));
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

    /// Sets the academy level.
    pub fn academy_level(mut self, academy_level: impl Into<String>) -> Self {
        self.academy_level = academy_level.into();
        self
    }

    /// Sets the account status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.player_id),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            age: ActiveValue::Set(self.age),
            role: ActiveValue::Set(self.role),
            academy_level: ActiveValue::Set(self.academy_level),
            email_address: ActiveValue::Set(self.email_address),
            cricclubs_id: ActiveValue::Set(self.cricclubs_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values and no credentials.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
