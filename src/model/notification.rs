use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSessionDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationPlayerDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    pub recipient_id: i32,
    pub recipient_role: String,
    pub sender_id: Option<i32>,
    #[serde(rename = "type")]
    pub kind: String,
    pub session: Option<NotificationSessionDto>,
    pub player: Option<NotificationPlayerDto>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
