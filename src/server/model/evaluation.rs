//! Structured coach evaluations of a player.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::evaluation::{
        AreaFeedbackDto, CreateEvaluationDto, EvaluationCategoriesDto, EvaluationDto,
        EvaluationFeedbackDto,
    },
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone)]
pub struct Evaluation {
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

impl Evaluation {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Evaluation row
    /// - `player_name` / `coach_name` - Denormalised display names when joined
    ///
    /// # Returns
    /// - `Ok(Evaluation)` - Converted model
    /// - `Err(DbErr::Custom)` - A JSON column does not hold the expected shape
    pub fn from_entity(
        entity: entity::evaluation::Model,
        player_name: Option<String>,
        coach_name: Option<String>,
    ) -> Result<Self, DbErr> {
        let feedback = serde_json::from_value(entity.feedback).map_err(|e| {
            DbErr::Custom(format!("Corrupt value in column evaluation.feedback: {}", e))
        })?;
        let categories = serde_json::from_value(entity.categories).map_err(|e| {
            DbErr::Custom(format!(
                "Corrupt value in column evaluation.categories: {}",
                e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            player_name,
            coach_id: entity.coach_id,
            coach_name,
            date_of_evaluation: entity.date_of_evaluation,
            feedback,
            categories,
            coach_comments: entity.coach_comments,
            player_response: entity.player_response,
            player_responded: entity.player_responded,
            coach_notified: entity.coach_notified,
            player_notified: entity.player_notified,
        })
    }

    pub fn into_dto(self) -> EvaluationDto {
        EvaluationDto {
            id: self.id,
            player_id: self.player_id,
            player_name: self.player_name,
            coach_id: self.coach_id,
            coach_name: self.coach_name,
            date_of_evaluation: self.date_of_evaluation,
            feedback: self.feedback,
            categories: self.categories,
            coach_comments: self.coach_comments,
            player_response: self.player_response,
            player_responded: self.player_responded,
            coach_notified: self.coach_notified,
            player_notified: self.player_notified,
        }
    }
}

/// Validated creation request. The coach is resolved by the service from the caller.
#[derive(Debug, Clone)]
pub struct CreateEvaluationParams {
    pub player_id: i32,
    pub coach_id: Option<i32>,
    pub feedback: EvaluationFeedbackDto,
    pub categories: EvaluationCategoriesDto,
    pub coach_comments: Option<String>,
}

impl CreateEvaluationParams {
    /// # Returns
    /// - `Ok(CreateEvaluationParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - An area score lies outside 1-10
    pub fn from_dto(dto: CreateEvaluationDto) -> Result<Self, AppError> {
        let areas = [
            ("batting", &dto.feedback.batting),
            ("bowling", &dto.feedback.bowling),
            ("mindset", &dto.feedback.mindset),
            ("fitness", &dto.feedback.fitness),
        ];
        for (area, feedback) in areas {
            if let Some(AreaFeedbackDto {
                score: Some(score), ..
            }) = feedback
            {
                if !(1..=10).contains(score) {
                    return Err(AppError::BadRequest(format!(
                        "feedback.{}.score must be between 1 and 10",
                        area
                    )));
                }
            }
        }

        Ok(Self {
            player_id: dto.player_id,
            coach_id: dto.coach_id,
            feedback: dto.feedback,
            categories: dto.categories,
            coach_comments: dto.coach_comments.filter(|c| !c.trim().is_empty()),
        })
    }

    pub fn feedback_json(&self) -> Result<serde_json::Value, InternalError> {
        serde_json::to_value(&self.feedback).map_err(|source| InternalError::SerializeJson {
            what: "evaluation feedback",
            source,
        })
    }

    pub fn categories_json(&self) -> Result<serde_json::Value, InternalError> {
        serde_json::to_value(&self.categories).map_err(|source| InternalError::SerializeJson {
            what: "evaluation categories",
            source,
        })
    }
}
