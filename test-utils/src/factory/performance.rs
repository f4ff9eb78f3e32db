//! Performance factory for creating session feedback entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating performance entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let entry = PerformanceFactory::new(&db, session.id, player.id)
///     .batting(8)
///     .player_response(Some("Thanks coach".to_string()))
///     .build()
///     .await?;
/// ```
pub struct PerformanceFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: i32,
    player_id: i32,
    batting: Option<i32>,
    bowling: Option<i32>,
    notes: Option<String>,
    player_response: Option<String>,
}

impl<'a> PerformanceFactory<'a> {
    /// Creates a new PerformanceFactory with default values.
    ///
    /// Defaults:
    /// - batting: `7`
    /// - bowling: `5`
    /// - notes: `"Solid effort"`
    /// - player_response: none
    pub fn new(db: &'a DatabaseConnection, session_id: i32, player_id: i32) -> Self {
        Self {
            db,
            session_id,
            player_id,
            batting: Some(7),
            bowling: Some(5),
            notes: Some("Solid effort".to_string()),
            player_response: None,
        }
    }

    /// Sets the batting sub-score.
    pub fn batting(mut self, batting: i32) -> Self {
        self.batting = Some(batting);
        self
    }

    /// Sets the bowling sub-score.
    pub fn bowling(mut self, bowling: i32) -> Self {
        self.bowling = Some(bowling);
        self
    }

    /// Sets the player's response.
    pub fn player_response(mut self, player_response: Option<String>) -> Self {
        self.player_response = player_response;
        self
    }

    /// Builds and inserts the performance entry.
    ///
    /// # Returns
    /// - `Ok(entity::performance::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::performance::Model, DbErr> {
        let now = Utc::now();
        entity::performance::ActiveModel {
            id: ActiveValue::NotSet,
            session_id: ActiveValue::Set(self.session_id),
            player_id: ActiveValue::Set(self.player_id),
            batting: ActiveValue::Set(self.batting),
            bowling: ActiveValue::Set(self.bowling),
            wicketkeeping: ActiveValue::Set(None),
            fielding: ActiveValue::Set(None),
            notes: ActiveValue::Set(self.notes),
            focus_area: ActiveValue::Set(None),
            player_response: ActiveValue::Set(self.player_response),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default performance entry for (session, player).
pub async fn create_performance(
    db: &DatabaseConnection,
    session_id: i32,
    player_id: i32,
) -> Result<entity::performance::Model, DbErr> {
    PerformanceFactory::new(db, session_id, player_id)
        .build()
        .await
}
