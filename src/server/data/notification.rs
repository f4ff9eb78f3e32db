//! Notification repository.
//!
//! Every read and mutation is scoped to a recipient `(role, id)`; a notification
//! addressed to someone else behaves exactly like a missing one.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    enums::parse_stored,
    notification::{
        CreateNotificationParams, Notification, NotificationPlayer, NotificationSession,
        Recipient,
    },
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a notification, unread.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification with summaries resolved
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            recipient_id: ActiveValue::Set(params.recipient.id),
            recipient_role: ActiveValue::Set(params.recipient.role.as_str().to_string()),
            sender_id: ActiveValue::Set(params.sender_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            session_id: ActiveValue::Set(params.session_id),
            player_id: ActiveValue::Set(params.player_id),
            message: ActiveValue::Set(params.message),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut resolved = self.with_summaries(vec![entity]).await?;

        resolved
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("inserted notification".to_string()))
    }

    /// Gets a recipient's notifications, newest first.
    pub async fn get_for_recipient(
        &self,
        recipient: Recipient,
    ) -> Result<Vec<Notification>, DbErr> {
        let entities = scoped(recipient)
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        self.with_summaries(entities).await
    }

    /// Marks a notification read.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Updated notification
    /// - `Ok(None)` - No notification with that id addressed to `recipient`
    /// - `Err(DbErr)` - Database error
    pub async fn mark_read(
        &self,
        id: i32,
        recipient: Recipient,
    ) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = scoped(recipient)
            .filter(entity::notification::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.is_read = ActiveValue::Set(true);
        let entity = active.update(self.db).await?;

        let mut resolved = self.with_summaries(vec![entity]).await?;

        Ok(resolved.pop())
    }

    /// Deletes a notification.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification deleted
    /// - `Ok(false)` - No notification with that id addressed to `recipient`
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32, recipient: Recipient) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::RecipientId.eq(recipient.id))
            .filter(entity::notification::Column::RecipientRole.eq(recipient.role.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_summaries(
        &self,
        entities: Vec<entity::notification::Model>,
    ) -> Result<Vec<Notification>, DbErr> {
        let session_ids: HashSet<i32> = entities.iter().filter_map(|e| e.session_id).collect();
        let player_ids: HashSet<i32> = entities.iter().filter_map(|e| e.player_id).collect();

        let mut sessions: HashMap<i32, entity::session::Model> = HashMap::new();
        if !session_ids.is_empty() {
            sessions = entity::prelude::Session::find()
                .filter(entity::session::Column::Id.is_in(session_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect();
        }
        let mut players: HashMap<i32, String> = HashMap::new();
        if !player_ids.is_empty() {
            players = entity::prelude::Player::find()
                .filter(entity::player::Column::Id.is_in(player_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, format!("{} {}", p.first_name, p.last_name)))
                .collect();
        }

        entities
            .into_iter()
            .map(|entity| {
                let session = match entity.session_id.and_then(|id| sessions.get(&id)) {
                    Some(session) => Some(NotificationSession {
                        id: session.id,
                        date: session.date,
                        focus_area: parse_stored("session.focus_area", &session.focus_area)?,
                    }),
                    None => None,
                };
                let player = entity.player_id.and_then(|id| {
                    players.get(&id).map(|name| NotificationPlayer {
                        id,
                        name: name.clone(),
                    })
                });
                Notification::from_entity(entity, session, player)
            })
            .collect()
    }
}

fn scoped(recipient: Recipient) -> Select<entity::notification::Entity> {
    entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientId.eq(recipient.id))
        .filter(entity::notification::Column::RecipientRole.eq(recipient.role.as_str()))
}
