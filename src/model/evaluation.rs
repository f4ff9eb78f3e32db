use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Score (1-10) and free-text comments for one evaluation area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AreaFeedbackDto {
    pub score: Option<i32>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EvaluationFeedbackDto {
    pub batting: Option<AreaFeedbackDto>,
    pub bowling: Option<AreaFeedbackDto>,
    pub mindset: Option<AreaFeedbackDto>,
    pub fitness: Option<AreaFeedbackDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillRatingDto {
    Beginner,
    Tenured,
    Advanced,
    #[serde(rename = "N/A")]
    NotApplicable,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BattingCategoriesDto {
    pub straight_bat_shots: Option<SkillRatingDto>,
    pub shot_selection: Option<SkillRatingDto>,
    pub playing_spin: Option<SkillRatingDto>,
    pub playing_fast: Option<SkillRatingDto>,
    pub power: Option<SkillRatingDto>,
    pub foot_movement: Option<SkillRatingDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BowlingCategoriesDto {
    pub bowling_action: Option<SkillRatingDto>,
    pub accuracy: Option<SkillRatingDto>,
    pub pace_variation: Option<SkillRatingDto>,
    pub swing: Option<SkillRatingDto>,
    pub bowling_variation: Option<SkillRatingDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MindsetCategoriesDto {
    pub game_sense: Option<SkillRatingDto>,
    pub maintains_calm: Option<SkillRatingDto>,
    pub execute_strategies: Option<SkillRatingDto>,
    pub team_player: Option<SkillRatingDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FitnessCategoriesDto {
    pub stamina: Option<SkillRatingDto>,
    pub core: Option<SkillRatingDto>,
    pub power: Option<SkillRatingDto>,
    pub endurance: Option<SkillRatingDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EvaluationCategoriesDto {
    pub batting: Option<BattingCategoriesDto>,
    pub bowling: Option<BowlingCategoriesDto>,
    pub mindset: Option<MindsetCategoriesDto>,
    pub fitness: Option<FitnessCategoriesDto>,
}

/// Admins must name the evaluating coach; coaches always evaluate as themselves.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvaluationDto {
    pub player_id: i32,
    pub coach_id: Option<i32>,
    #[serde(default)]
    pub feedback: EvaluationFeedbackDto,
    #[serde(default)]
    pub categories: EvaluationCategoriesDto,
    pub coach_comments: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespondEvaluationDto {
    pub player_response: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    pub id: i32,
    pub player_id: i32,
    pub player_name: Option<String>,
    pub coach_id: i32,
    pub coach_name: Option<String>,
    pub date_of_evaluation: DateTime<Utc>,
    pub feedback: EvaluationFeedbackDto,
    pub categories: EvaluationCategoriesDto,
    pub coach_comments: Option<String>,
    pub player_response: Option<String>,
    pub player_responded: bool,
    pub coach_notified: bool,
    pub player_notified: bool,
}
