use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayerDto {
    pub id: i32,
    pub player_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: String,
    pub coach_id: i32,
    pub coach_name: Option<String>,
    pub players: Vec<RosterPlayerDto>,
    pub notes: Option<String>,
    pub status: String,
    pub feedback_submitted: bool,
    pub is_recurring: bool,
    pub day_of_week: Option<String>,
    pub time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub recurrence_group_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDto {
    pub date: DateTime<Utc>,
    pub focus_area: String,
    pub coach_id: i32,
    #[serde(default)]
    pub player_ids: Vec<i32>,
    pub notes: Option<String>,
}

/// Expands into `occurrences` weekly sessions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringSessionDto {
    pub start_date: DateTime<Utc>,
    pub day_of_week: String,
    /// `HH:MM`, interpreted as UTC
    pub time: String,
    pub duration_minutes: i32,
    pub occurrences: u32,
    pub focus_area: String,
    pub coach_id: i32,
    #[serde(default)]
    pub player_ids: Vec<i32>,
    pub notes: Option<String>,
}
