//! Notifications addressed to a single account.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::notification::{NotificationDto, NotificationPlayerDto, NotificationSessionDto},
    server::model::{
        auth::Identity,
        enums::{parse_stored, FocusArea, NotificationKind, Role},
    },
};

/// Address of one account: ids are only unique within a role's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Recipient {
    pub role: Role,
    pub id: i32,
}

impl Recipient {
    pub fn player(id: i32) -> Self {
        Self {
            role: Role::Player,
            id,
        }
    }

    pub fn coach(id: i32) -> Self {
        Self {
            role: Role::Coach,
            id,
        }
    }
}

impl From<&Identity> for Recipient {
    fn from(identity: &Identity) -> Self {
        Self {
            role: identity.role(),
            id: identity.id(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationSession {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: FocusArea,
}

#[derive(Debug, Clone)]
pub struct NotificationPlayer {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i32,
    pub recipient: Recipient,
    pub sender_id: Option<i32>,
    pub kind: NotificationKind,
    pub session: Option<NotificationSession>,
    pub player: Option<NotificationPlayer>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Referenced session and player summaries are attached by the repository when
    /// they still exist.
    pub fn from_entity(
        entity: entity::notification::Model,
        session: Option<NotificationSession>,
        player: Option<NotificationPlayer>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            recipient: Recipient {
                role: parse_stored("notification.recipient_role", &entity.recipient_role)?,
                id: entity.recipient_id,
            },
            sender_id: entity.sender_id,
            kind: parse_stored("notification.kind", &entity.kind)?,
            session,
            player,
            message: entity.message,
            is_read: entity.is_read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            recipient_id: self.recipient.id,
            recipient_role: self.recipient.role.as_str().to_string(),
            sender_id: self.sender_id,
            kind: self.kind.as_str().to_string(),
            session: self.session.map(|session| NotificationSessionDto {
                id: session.id,
                date: session.date,
                focus_area: session.focus_area.as_str().to_string(),
            }),
            player: self.player.map(|player| NotificationPlayerDto {
                id: player.id,
                name: player.name,
            }),
            message: self.message,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub recipient: Recipient,
    pub sender_id: Option<i32>,
    pub kind: NotificationKind,
    pub session_id: Option<i32>,
    pub player_id: Option<i32>,
    pub message: String,
}
