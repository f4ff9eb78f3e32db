//! Session factory for creating test sessions with their roster.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions with customizable fields.
///
/// Roster rows are inserted for every player id passed to `new`.
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionFactory::new(&db, coach.id, &[player.id])
///     .focus_area("Bowling")
///     .date(Utc::now() + Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    coach_id: i32,
    player_ids: Vec<i32>,
    date: DateTime<Utc>,
    focus_area: String,
    notes: Option<String>,
    feedback_submitted: bool,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - date: 1 day from now
    /// - focus_area: `"Batting"`
    /// - notes: none
    /// - feedback_submitted: `false`
    pub fn new(db: &'a DatabaseConnection, coach_id: i32, player_ids: &[i32]) -> Self {
        Self {
            db,
            coach_id,
            player_ids: player_ids.to_vec(),
            date: Utc::now() + Duration::days(1),
            focus_area: "Batting".to_string(),
            notes: None,
            feedback_submitted: false,
        }
    }

    /// Sets the session date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the focus area.
    pub fn focus_area(mut self, focus_area: impl Into<String>) -> Self {
        self.focus_area = focus_area.into();
        self
    }

    /// Sets the session notes.
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Marks the session as already having feedback.
    pub fn feedback_submitted(mut self, feedback_submitted: bool) -> Self {
        self.feedback_submitted = feedback_submitted;
        self
    }

    /// Builds and inserts the session and its roster rows.
    ///
    /// # Returns
    /// - `Ok(entity::session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        let session = entity::session::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(self.date),
            focus_area: ActiveValue::Set(self.focus_area),
            coach_id: ActiveValue::Set(self.coach_id),
            notes: ActiveValue::Set(self.notes),
            status: ActiveValue::Set("Active".to_string()),
            feedback_submitted: ActiveValue::Set(self.feedback_submitted),
            is_recurring: ActiveValue::Set(false),
            day_of_week: ActiveValue::Set(None),
            time: ActiveValue::Set(None),
            duration_minutes: ActiveValue::Set(None),
            recurrence_group_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for player_id in self.player_ids {
            entity::session_player::ActiveModel {
                session_id: ActiveValue::Set(session.id),
                player_id: ActiveValue::Set(player_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(session)
    }
}

/// Creates a session owned by `coach_id` with the given roster.
pub async fn create_session(
    db: &DatabaseConnection,
    coach_id: i32,
    player_ids: &[i32],
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, coach_id, player_ids).build().await
}
