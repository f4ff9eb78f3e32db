//! Evaluation factory for creating structured coach evaluations.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating evaluations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let evaluation = EvaluationFactory::new(&db, player.id, coach.id)
///     .player_responded(true)
///     .build()
///     .await?;
/// ```
pub struct EvaluationFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    coach_id: i32,
    date_of_evaluation: DateTime<Utc>,
    feedback: serde_json::Value,
    categories: serde_json::Value,
    player_response: Option<String>,
    player_responded: bool,
}

impl<'a> EvaluationFactory<'a> {
    /// Creates a new EvaluationFactory with default values.
    ///
    /// Defaults:
    /// - date_of_evaluation: now
    /// - feedback: batting score 7 with a comment
    /// - categories: batting power rated `"Tenured"`
    /// - not yet responded
    pub fn new(db: &'a DatabaseConnection, player_id: i32, coach_id: i32) -> Self {
        Self {
            db,
            player_id,
            coach_id,
            date_of_evaluation: Utc::now(),
            feedback: json!({ "batting": { "score": 7, "comments": "Good footwork" } }),
            categories: json!({ "batting": { "power": "Tenured" } }),
            player_response: None,
            player_responded: false,
        }
    }

    /// Sets the evaluation date.
    pub fn date_of_evaluation(mut self, date: DateTime<Utc>) -> Self {
        self.date_of_evaluation = date;
        self
    }

    /// Marks the evaluation as already answered.
    pub fn player_responded(mut self, responded: bool) -> Self {
        self.player_responded = responded;
        if responded && self.player_response.is_none() {
            self.player_response = Some("Noted".to_string());
        }
        self
    }

    /// Builds and inserts the evaluation.
    ///
    /// # Returns
    /// - `Ok(entity::evaluation::Model)` - Created evaluation
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::evaluation::Model, DbErr> {
        entity::evaluation::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.player_id),
            coach_id: ActiveValue::Set(self.coach_id),
            date_of_evaluation: ActiveValue::Set(self.date_of_evaluation),
            feedback: ActiveValue::Set(self.feedback),
            categories: ActiveValue::Set(self.categories),
            coach_comments: ActiveValue::Set(None),
            player_response: ActiveValue::Set(self.player_response),
            player_responded: ActiveValue::Set(self.player_responded),
            coach_notified: ActiveValue::Set(false),
            player_notified: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default evaluation of `player_id` by `coach_id`.
pub async fn create_evaluation(
    db: &DatabaseConnection,
    player_id: i32,
    coach_id: i32,
) -> Result<entity::evaluation::Model, DbErr> {
    EvaluationFactory::new(db, player_id, coach_id).build().await
}
