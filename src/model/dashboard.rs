use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{feedback::RatingDto, session::SessionDto};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaCountDto {
    pub focus_area: String,
    pub count: u64,
}

/// Academy-wide totals for the admin dashboard.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsDto {
    pub total_players: u64,
    pub total_coaches: u64,
    pub total_sessions: u64,
    pub sessions_by_focus_area: Vec<FocusAreaCountDto>,
    pub upcoming_sessions: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentSessionDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: String,
    pub feedback_count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPointDto {
    pub session_id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: String,
    pub rating: RatingDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardDto {
    pub upcoming_sessions: Vec<SessionDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachSummaryDto {
    pub name: String,
    pub total_sessions: u64,
    pub total_players: u64,
    pub recent_sessions: Vec<RecentSessionDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummaryDto {
    pub name: String,
    pub academy_level: String,
    pub status: String,
    pub recent_progress: Vec<ProgressPointDto>,
}

/// Summary tailored to the caller's role, tagged by `role`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardDto {
    Admin(AdminDashboardDto),
    Coach(CoachSummaryDto),
    Player(PlayerSummaryDto),
}
