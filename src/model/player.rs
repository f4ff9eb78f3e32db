use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{coach::PlayerNoteDto, feedback::PerformanceDto, feedback::RatingDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub player_id: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub role: String,
    pub academy_level: String,
    pub email_address: String,
    pub cricclubs_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// `playerId` is generated (`PLR####`) when omitted. Credentials are optional but
/// must be given together.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    pub player_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub role: String,
    pub academy_level: String,
    pub email_address: String,
    pub cricclubs_id: String,
    pub status: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerDto {
    pub player_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub role: Option<String>,
    pub academy_level: Option<String>,
    pub email_address: Option<String>,
    pub cricclubs_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlayerStatusDto {
    pub status: String,
}

/// One rated session in a player's history.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceHistoryDto {
    pub session_id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: String,
    pub rating: RatingDto,
    pub notes: Option<String>,
    pub player_response: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfileDto {
    pub player: PlayerDto,
    pub performance_history: Vec<PerformanceHistoryDto>,
    pub coach_notes: Vec<PlayerNoteDto>,
}

/// A session on the caller's roster with the caller's own feedback entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSessionDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: String,
    pub coach_name: String,
    pub notes: Option<String>,
    pub status: String,
    pub feedback: Option<PerformanceDto>,
}
