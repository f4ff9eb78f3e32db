use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::session::SessionDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachDto {
    pub id: i32,
    pub coach_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub experience_years: i32,
    pub email_address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// `coachId` is generated (`CCH####`) when omitted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoachDto {
    pub coach_id: Option<String>,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    #[serde(default)]
    pub experience_years: i32,
    pub email_address: String,
    pub status: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoachDto {
    pub coach_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialty: Option<String>,
    pub experience_years: Option<i32>,
    pub email_address: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachDashboardDto {
    pub coach: CoachDto,
    pub total_sessions: u64,
    pub total_players: u64,
    pub sessions: Vec<SessionDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerNoteDto {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerNoteDto {
    pub id: i32,
    pub player_id: i32,
    pub coach_id: i32,
    pub coach_name: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
