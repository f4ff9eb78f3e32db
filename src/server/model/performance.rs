//! Per-player performance entries recorded against a session.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::feedback::{
        FeedbackEntryDto, PerformanceDto, PerformanceNoteDto, RatingDto, RatingInputDto,
        SessionFeedbackDto, SubmitFeedbackDto,
    },
    server::{
        error::AppError,
        model::{
            enums::{parse_stored, FocusArea},
            session::Session,
        },
        util::parse::parse_enum,
    },
};

const MAX_SUB_SCORE: i32 = 10;

/// Structured rating; each present sub-score lies in 0-10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rating {
    pub batting: Option<i32>,
    pub bowling: Option<i32>,
    pub wicketkeeping: Option<i32>,
    pub fielding: Option<i32>,
}

impl Rating {
    /// Normalises either accepted rating shape.
    ///
    /// A bare number `n` becomes `{batting: n, bowling: 0, wicketkeeping: 0, fielding: 0}`.
    ///
    /// # Returns
    /// - `Ok(Rating)` - Normalised rating
    /// - `Err(AppError::BadRequest)` - A sub-score is outside 0-10 or none is present
    pub fn from_input(input: RatingInputDto) -> Result<Self, AppError> {
        let rating = match input {
            RatingInputDto::Score(score) => Self {
                batting: Some(score),
                bowling: Some(0),
                wicketkeeping: Some(0),
                fielding: Some(0),
            },
            RatingInputDto::Structured(dto) => Self {
                batting: dto.batting,
                bowling: dto.bowling,
                wicketkeeping: dto.wicketkeeping,
                fielding: dto.fielding,
            },
        };

        let scores = [
            ("batting", rating.batting),
            ("bowling", rating.bowling),
            ("wicketkeeping", rating.wicketkeeping),
            ("fielding", rating.fielding),
        ];

        if scores.iter().all(|(_, score)| score.is_none()) {
            return Err(AppError::BadRequest(
                "rating must contain at least one score".to_string(),
            ));
        }

        for (skill, score) in scores {
            if let Some(score) = score {
                if !(0..=MAX_SUB_SCORE).contains(&score) {
                    return Err(AppError::BadRequest(format!(
                        "rating.{} must be between 0 and {}",
                        skill, MAX_SUB_SCORE
                    )));
                }
            }
        }

        Ok(rating)
    }

    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            batting: self.batting,
            bowling: self.bowling,
            wicketkeeping: self.wicketkeeping,
            fielding: self.fielding,
        }
    }
}

/// One stored performance row, unique per (session, player).
#[derive(Debug, Clone)]
pub struct PerformanceEntry {
    pub id: i32,
    pub session_id: i32,
    pub player_id: i32,
    pub player_name: Option<String>,
    pub rating: Rating,
    pub notes: Option<String>,
    pub focus_area: Option<FocusArea>,
    pub player_response: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PerformanceEntry {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Performance row
    /// - `player_name` - Display name when the caller joined the player table
    pub fn from_entity(
        entity: entity::performance::Model,
        player_name: Option<String>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            session_id: entity.session_id,
            player_id: entity.player_id,
            player_name,
            rating: Rating {
                batting: entity.batting,
                bowling: entity.bowling,
                wicketkeeping: entity.wicketkeeping,
                fielding: entity.fielding,
            },
            notes: entity.notes,
            focus_area: entity
                .focus_area
                .as_deref()
                .map(|area| parse_stored("performance.focus_area", area))
                .transpose()?,
            player_response: entity.player_response,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PerformanceDto {
        PerformanceDto {
            id: self.id,
            session_id: self.session_id,
            player_id: self.player_id,
            player_name: self.player_name,
            rating: self.rating.into_dto(),
            notes: self.notes,
            focus_area: self.focus_area.map(|area| area.as_str().to_string()),
            player_response: self.player_response,
            updated_at: self.updated_at,
        }
    }
}

/// A validated entry to upsert for one player.
#[derive(Debug, Clone)]
pub struct FeedbackEntryParams {
    pub player_id: i32,
    pub rating: Rating,
    pub notes: Option<String>,
    pub focus_area: Option<FocusArea>,
}

impl FeedbackEntryParams {
    /// Validates one element of a feedback array.
    ///
    /// # Arguments
    /// - `dto` - Raw entry
    /// - `index` - Position in the array, used in error messages
    pub fn from_dto(dto: FeedbackEntryDto, index: usize) -> Result<Self, AppError> {
        let player_id = dto.player_id.ok_or_else(|| {
            AppError::BadRequest(format!("feedback[{}].playerId is required", index))
        })?;
        let rating = dto.rating.ok_or_else(|| {
            AppError::BadRequest(format!("feedback[{}].rating is required", index))
        })?;

        Ok(Self {
            player_id,
            rating: Rating::from_input(rating)?,
            notes: dto.notes,
            focus_area: parse_focus_area(dto.focus_area)?,
        })
    }

    /// Validates a single performance note for `player_id`.
    pub fn from_note(player_id: i32, dto: PerformanceNoteDto) -> Result<Self, AppError> {
        let rating = dto
            .rating
            .ok_or_else(|| AppError::BadRequest("rating is required".to_string()))?;

        Ok(Self {
            player_id,
            rating: Rating::from_input(rating)?,
            notes: dto.notes,
            focus_area: parse_focus_area(dto.focus_area)?,
        })
    }
}

/// Validates a whole feedback submission, preserving array order.
///
/// # Returns
/// - `Ok(Vec<FeedbackEntryParams>)` - At least one validated entry
/// - `Err(AppError::BadRequest)` - Empty array or an invalid entry
pub fn feedback_entries_from_dto(
    dto: SubmitFeedbackDto,
) -> Result<Vec<FeedbackEntryParams>, AppError> {
    if dto.feedback.is_empty() {
        return Err(AppError::BadRequest(
            "feedback must contain at least one entry".to_string(),
        ));
    }

    dto.feedback
        .into_iter()
        .enumerate()
        .map(|(index, entry)| FeedbackEntryParams::from_dto(entry, index))
        .collect()
}

fn parse_focus_area(value: Option<String>) -> Result<Option<FocusArea>, AppError> {
    value
        .filter(|area| !area.trim().is_empty())
        .map(|area| parse_enum(area.trim()))
        .transpose()
}

/// A session together with the entries visible to the caller.
#[derive(Debug, Clone)]
pub struct SessionFeedback {
    pub session: Session,
    pub entries: Vec<PerformanceEntry>,
}

impl SessionFeedback {
    pub fn into_dto(self) -> SessionFeedbackDto {
        SessionFeedbackDto {
            session_id: self.session.id,
            date: self.session.date,
            focus_area: self.session.focus_area.as_str().to_string(),
            feedback_submitted: self.session.feedback_submitted,
            entries: self
                .entries
                .into_iter()
                .map(PerformanceEntry::into_dto)
                .collect(),
        }
    }
}
