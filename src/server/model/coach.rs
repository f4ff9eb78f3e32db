//! Coach domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::coach::{CoachDashboardDto, CoachDto, CreateCoachDto, UpdateCoachDto},
    server::{
        error::AppError,
        model::{
            admin::required_password,
            enums::{parse_stored, CoachSpecialty, CoachStatus},
            session::SessionWithRoster,
        },
        util::{parse::parse_enum, validate},
    },
};

#[derive(Debug, Clone)]
pub struct Coach {
    pub id: i32,
    /// External id, `CCH####` unless supplied at creation.
    pub coach_id: String,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: CoachSpecialty,
    pub experience_years: i32,
    pub email_address: String,
    pub status: CoachStatus,
    pub created_at: DateTime<Utc>,
}

impl Coach {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Coach)` - Converted model
    /// - `Err(DbErr::Custom)` - Stored specialty or status is not a known value
    pub fn from_entity(entity: entity::coach::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            coach_id: entity.coach_id,
            username: entity.username,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            specialty: parse_stored("coach.specialty", &entity.specialty)?,
            experience_years: entity.experience_years,
            email_address: entity.email_address,
            status: parse_stored("coach.status", &entity.status)?,
            created_at: entity.created_at,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> CoachDto {
        CoachDto {
            id: self.id,
            coach_id: self.coach_id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            specialty: self.specialty.as_str().to_string(),
            experience_years: self.experience_years,
            email_address: self.email_address,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCoachParams {
    pub coach_id: Option<String>,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: CoachSpecialty,
    pub experience_years: i32,
    pub email_address: String,
    pub status: CoachStatus,
}

impl CreateCoachParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateCoachParams)` - Normalised parameters, status defaulting to Active
    /// - `Err(AppError::BadRequest)` - Blank field, bad email, negative experience or
    ///   unknown enum value
    pub fn from_dto(dto: CreateCoachDto) -> Result<Self, AppError> {
        Ok(Self {
            coach_id: optional_external_id("coachId", dto.coach_id)?,
            username: validate::required("username", &dto.username)?,
            password: required_password(&dto.password)?,
            first_name: validate::required("firstName", &dto.first_name)?,
            last_name: validate::required("lastName", &dto.last_name)?,
            specialty: parse_enum(dto.specialty.trim())?,
            experience_years: validate_experience(dto.experience_years)?,
            email_address: validate::email(&dto.email_address)?,
            status: match dto.status {
                Some(status) => parse_enum(status.trim())?,
                None => CoachStatus::Active,
            },
        })
    }
}

/// Partial update, every present field revalidated.
#[derive(Debug, Clone, Default)]
pub struct UpdateCoachParams {
    pub coach_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialty: Option<CoachSpecialty>,
    pub experience_years: Option<i32>,
    pub email_address: Option<String>,
    pub status: Option<CoachStatus>,
}

impl UpdateCoachParams {
    pub fn from_dto(dto: UpdateCoachDto) -> Result<Self, AppError> {
        Ok(Self {
            coach_id: dto
                .coach_id
                .map(|id| validate::required("coachId", &id))
                .transpose()?,
            username: dto
                .username
                .map(|name| validate::required("username", &name))
                .transpose()?,
            password: dto.password.map(|p| required_password(&p)).transpose()?,
            first_name: dto
                .first_name
                .map(|name| validate::required("firstName", &name))
                .transpose()?,
            last_name: dto
                .last_name
                .map(|name| validate::required("lastName", &name))
                .transpose()?,
            specialty: dto.specialty.map(|s| parse_enum(s.trim())).transpose()?,
            experience_years: dto.experience_years.map(validate_experience).transpose()?,
            email_address: dto.email_address.map(|e| validate::email(&e)).transpose()?,
            status: dto.status.map(|s| parse_enum(s.trim())).transpose()?,
        })
    }
}

fn validate_experience(years: i32) -> Result<i32, AppError> {
    if years < 0 {
        return Err(AppError::BadRequest(
            "experienceYears must not be negative".to_string(),
        ));
    }
    Ok(years)
}

/// Blank external ids count as absent so they get generated.
pub fn optional_external_id(
    field: &str,
    value: Option<String>,
) -> Result<Option<String>, AppError> {
    match value {
        Some(id) if !id.trim().is_empty() => Ok(Some(validate::required(field, &id)?)),
        _ => Ok(None),
    }
}

/// Coach landing page: profile plus every owned session.
#[derive(Debug, Clone)]
pub struct CoachDashboard {
    pub coach: Coach,
    pub total_sessions: u64,
    pub total_players: u64,
    pub sessions: Vec<SessionWithRoster>,
}

impl CoachDashboard {
    pub fn into_dto(self) -> CoachDashboardDto {
        CoachDashboardDto {
            coach: self.coach.into_dto(),
            total_sessions: self.total_sessions,
            total_players: self.total_players,
            sessions: self
                .sessions
                .into_iter()
                .map(SessionWithRoster::into_dto)
                .collect(),
        }
    }
}
