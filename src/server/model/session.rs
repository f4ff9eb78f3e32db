//! Session domain models, including weekly recurrence expansion.

use chrono::{DateTime, Datelike, Days, NaiveTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::session::{CreateRecurringSessionDto, CreateSessionDto, RosterPlayerDto, SessionDto},
    server::{
        error::{internal::InternalError, AppError},
        model::enums::{parse_stored, DayOfWeek, FocusArea, SessionStatus},
        util::parse::{parse_enum, parse_time_of_day},
    },
};

/// Upper bound on occurrences generated by one recurring request.
pub const MAX_OCCURRENCES: u32 = 52;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: FocusArea,
    pub coach_id: i32,
    pub notes: Option<String>,
    pub status: SessionStatus,
    pub feedback_submitted: bool,
    pub is_recurring: bool,
    pub day_of_week: Option<DayOfWeek>,
    pub time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub recurrence_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::session::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            date: entity.date,
            focus_area: parse_stored("session.focus_area", &entity.focus_area)?,
            coach_id: entity.coach_id,
            notes: entity.notes,
            status: parse_stored("session.status", &entity.status)?,
            feedback_submitted: entity.feedback_submitted,
            is_recurring: entity.is_recurring,
            day_of_week: entity
                .day_of_week
                .as_deref()
                .map(|day| parse_stored("session.day_of_week", day))
                .transpose()?,
            time: entity.time,
            duration_minutes: entity.duration_minutes,
            recurrence_group_id: entity.recurrence_group_id,
            created_at: entity.created_at,
        })
    }
}

/// Roster member with the display fields the session views need.
#[derive(Debug, Clone)]
pub struct RosterPlayer {
    pub id: i32,
    pub player_id: String,
    pub name: String,
}

impl RosterPlayer {
    pub fn into_dto(self) -> RosterPlayerDto {
        RosterPlayerDto {
            id: self.id,
            player_id: self.player_id,
            name: self.name,
        }
    }
}

/// A session with its coach name and roster resolved.
#[derive(Debug, Clone)]
pub struct SessionWithRoster {
    pub session: Session,
    pub coach_name: Option<String>,
    pub players: Vec<RosterPlayer>,
}

impl SessionWithRoster {
    pub fn into_dto(self) -> SessionDto {
        let session = self.session;
        SessionDto {
            id: session.id,
            date: session.date,
            focus_area: session.focus_area.as_str().to_string(),
            coach_id: session.coach_id,
            coach_name: self.coach_name,
            players: self.players.into_iter().map(RosterPlayer::into_dto).collect(),
            notes: session.notes,
            status: session.status.as_str().to_string(),
            feedback_submitted: session.feedback_submitted,
            is_recurring: session.is_recurring,
            day_of_week: session.day_of_week.map(|day| day.as_str().to_string()),
            time: session.time,
            duration_minutes: session.duration_minutes,
            recurrence_group_id: session.recurrence_group_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    pub date: DateTime<Utc>,
    pub focus_area: FocusArea,
    pub coach_id: i32,
    pub player_ids: Vec<i32>,
    pub notes: Option<String>,
}

impl CreateSessionParams {
    pub fn from_dto(dto: CreateSessionDto) -> Result<Self, AppError> {
        Ok(Self {
            date: dto.date,
            focus_area: parse_enum(dto.focus_area.trim())?,
            coach_id: dto.coach_id,
            player_ids: dedup_ids(dto.player_ids),
            notes: dto.notes,
        })
    }
}

/// Recurrence descriptor shared by every occurrence in one group.
#[derive(Debug, Clone)]
pub struct Recurrence {
    pub day_of_week: DayOfWeek,
    pub time: NaiveTime,
    pub duration_minutes: i32,
    pub group_id: String,
}

/// One row to insert into the session table.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub date: DateTime<Utc>,
    pub focus_area: FocusArea,
    pub coach_id: i32,
    pub notes: Option<String>,
    pub recurrence: Option<Recurrence>,
}

impl From<&CreateSessionParams> for NewSession {
    fn from(params: &CreateSessionParams) -> Self {
        Self {
            date: params.date,
            focus_area: params.focus_area,
            coach_id: params.coach_id,
            notes: params.notes.clone(),
            recurrence: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRecurringSessionParams {
    pub start_date: DateTime<Utc>,
    pub day_of_week: DayOfWeek,
    pub time: NaiveTime,
    pub duration_minutes: i32,
    pub occurrences: u32,
    pub focus_area: FocusArea,
    pub coach_id: i32,
    pub player_ids: Vec<i32>,
    pub notes: Option<String>,
}

impl CreateRecurringSessionParams {
    /// Validates a recurring request.
    ///
    /// # Returns
    /// - `Ok(CreateRecurringSessionParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Unknown day or focus area, malformed `HH:MM` time,
    ///   non-positive duration or occurrences outside 1-52
    pub fn from_dto(dto: CreateRecurringSessionDto) -> Result<Self, AppError> {
        if dto.occurrences == 0 || dto.occurrences > MAX_OCCURRENCES {
            return Err(AppError::BadRequest(format!(
                "occurrences must be between 1 and {}",
                MAX_OCCURRENCES
            )));
        }
        if dto.duration_minutes <= 0 {
            return Err(AppError::BadRequest(
                "durationMinutes must be positive".to_string(),
            ));
        }

        Ok(Self {
            start_date: dto.start_date,
            day_of_week: parse_enum(dto.day_of_week.trim())?,
            time: parse_time_of_day(&dto.time)?,
            duration_minutes: dto.duration_minutes,
            occurrences: dto.occurrences,
            focus_area: parse_enum(dto.focus_area.trim())?,
            coach_id: dto.coach_id,
            player_ids: dedup_ids(dto.player_ids),
            notes: dto.notes,
        })
    }

    /// Start times of every occurrence.
    ///
    /// The first falls on the first `day_of_week` on or after `start_date`; the rest
    /// follow at 7 day intervals, all at `time` UTC.
    pub fn occurrence_dates(&self) -> Result<Vec<DateTime<Utc>>, InternalError> {
        let start = self.start_date.date_naive();
        let target = self.day_of_week.to_weekday().num_days_from_monday();
        let current = start.weekday().num_days_from_monday();
        let offset = (7 + target - current) % 7;

        (0..self.occurrences)
            .map(|occurrence| {
                start
                    .checked_add_days(Days::new(u64::from(offset) + 7 * u64::from(occurrence)))
                    .map(|day| day.and_time(self.time).and_utc())
                    .ok_or(InternalError::OccurrenceOutOfRange {
                        occurrence: occurrence + 1,
                    })
            })
            .collect()
    }

    /// Expands into one insertable row per occurrence, all sharing `group_id`.
    pub fn expand(&self, group_id: &str) -> Result<Vec<NewSession>, InternalError> {
        let recurrence = Recurrence {
            day_of_week: self.day_of_week,
            time: self.time,
            duration_minutes: self.duration_minutes,
            group_id: group_id.to_string(),
        };

        Ok(self
            .occurrence_dates()?
            .into_iter()
            .map(|date| NewSession {
                date,
                focus_area: self.focus_area,
                coach_id: self.coach_id,
                notes: self.notes.clone(),
                recurrence: Some(recurrence.clone()),
            })
            .collect())
    }
}

fn dedup_ids(mut ids: Vec<i32>) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(*id));
    ids
}
