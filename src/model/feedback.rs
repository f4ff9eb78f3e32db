use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured per-skill rating, each sub-score 0-10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub batting: Option<i32>,
    pub bowling: Option<i32>,
    pub wicketkeeping: Option<i32>,
    pub fielding: Option<i32>,
}

/// Accepted rating shapes.
///
/// A bare number is the legacy shape and is read as a batting score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RatingInputDto {
    Structured(RatingDto),
    Score(i32),
}

/// `playerId` and `rating` are optional here only so that missing values are
/// reported with a precise 400 message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntryDto {
    pub player_id: Option<i32>,
    pub rating: Option<RatingInputDto>,
    pub notes: Option<String>,
    pub focus_area: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitFeedbackDto {
    #[serde(default)]
    pub feedback: Vec<FeedbackEntryDto>,
}

/// Single performance note for one player in one session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceNoteDto {
    pub rating: Option<RatingInputDto>,
    pub notes: Option<String>,
    pub focus_area: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDto {
    pub id: i32,
    pub session_id: i32,
    pub player_id: i32,
    pub player_name: Option<String>,
    pub rating: RatingDto,
    pub notes: Option<String>,
    pub focus_area: Option<String>,
    pub player_response: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A session together with its feedback entries.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionFeedbackDto {
    pub session_id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: String,
    pub feedback_submitted: bool,
    pub entries: Vec<PerformanceDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponseDto {
    pub response: String,
}
