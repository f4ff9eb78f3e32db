//! Notification persistence plus best-effort push to connected clients.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification, Recipient},
    push::PushHub,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    push: &'a PushHub,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, push: &'a PushHub) -> Self {
        Self { db, push }
    }

    /// Persists a notification, then pushes it to the recipient's channel.
    ///
    /// The push is attempted only after the row is stored and its outcome never
    /// affects the result.
    ///
    /// # Arguments
    /// - `params` - Notification to store
    /// - `event` - SSE event name used for the push
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification
    /// - `Err(AppError::DbErr)` - Persisting failed; nothing was pushed
    pub async fn notify(
        &self,
        params: CreateNotificationParams,
        event: &'static str,
    ) -> Result<Notification, AppError> {
        let notification = NotificationRepository::new(self.db).create(params).await?;

        match serde_json::to_value(notification.clone().into_dto()) {
            Ok(payload) => {
                self.push.publish(notification.recipient, event, payload);
            }
            Err(e) => tracing::warn!(
                "Failed to serialize notification {} for push: {}",
                notification.id,
                e
            ),
        }

        Ok(notification)
    }

    pub async fn list(&self, recipient: Recipient) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_for_recipient(recipient)
            .await?)
    }

    /// Marks one of the recipient's notifications read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Updated notification
    /// - `Err(AppError::NotFound)` - Missing or addressed to someone else
    pub async fn mark_read(&self, id: i32, recipient: Recipient) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, recipient)
            .await?
            .ok_or_else(notification_not_found)
    }

    /// Deletes one of the recipient's notifications.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::NotFound)` - Missing or addressed to someone else
    pub async fn delete(&self, id: i32, recipient: Recipient) -> Result<(), AppError> {
        match NotificationRepository::new(self.db)
            .delete(id, recipient)
            .await?
        {
            true => Ok(()),
            false => Err(notification_not_found()),
        }
    }
}

fn notification_not_found() -> AppError {
    AppError::NotFound("Notification not found".to_string())
}
