//! Notification factory for creating recipient-scoped messages.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating notifications with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let notification = NotificationFactory::new(&db, player.id, "player")
///     .session_id(Some(session.id))
///     .build()
///     .await?;
/// ```
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    recipient_id: i32,
    recipient_role: String,
    kind: String,
    session_id: Option<i32>,
    player_id: Option<i32>,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"feedback-submitted"`
    /// - message: `"Test notification"`
    /// - unread, created now
    pub fn new(db: &'a DatabaseConnection, recipient_id: i32, recipient_role: &str) -> Self {
        Self {
            db,
            recipient_id,
            recipient_role: recipient_role.to_string(),
            kind: "feedback-submitted".to_string(),
            session_id: None,
            player_id: None,
            message: "Test notification".to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the notification kind.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the referenced session.
    pub fn session_id(mut self, session_id: Option<i32>) -> Self {
        self.session_id = session_id;
        self
    }

    /// Sets the referenced player.
    pub fn player_id(mut self, player_id: Option<i32>) -> Self {
        self.player_id = player_id;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::NotSet,
            recipient_id: ActiveValue::Set(self.recipient_id),
            recipient_role: ActiveValue::Set(self.recipient_role),
            sender_id: ActiveValue::Set(None),
            kind: ActiveValue::Set(self.kind),
            session_id: ActiveValue::Set(self.session_id),
            player_id: ActiveValue::Set(self.player_id),
            message: ActiveValue::Set(self.message),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for (recipient_id, recipient_role).
pub async fn create_notification(
    db: &DatabaseConnection,
    recipient_id: i32,
    recipient_role: &str,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, recipient_id, recipient_role)
        .build()
        .await
}
