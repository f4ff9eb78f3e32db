//! Player domain models, parameters and read models built around a player.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        coach::PlayerNoteDto,
        player::{
            CreatePlayerDto, PerformanceHistoryDto, PlayerDto, PlayerProfileDto,
            PlayerSessionDto, UpdatePlayerDto,
        },
    },
    server::{
        error::AppError,
        model::{
            admin::required_password,
            coach::optional_external_id,
            enums::{parse_stored, AcademyLevel, FocusArea, PlayerRole, PlayerStatus},
            performance::{PerformanceEntry, Rating},
            session::Session,
        },
        util::{parse::parse_enum, validate},
    },
};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i32,
    /// External id, `PLR####` unless supplied at creation.
    pub player_id: String,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub role: PlayerRole,
    pub academy_level: AcademyLevel,
    pub email_address: String,
    pub cricclubs_id: String,
    pub status: PlayerStatus,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - Converted model
    /// - `Err(DbErr::Custom)` - A stored enum column holds an unknown value
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            username: entity.username,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            age: entity.age,
            role: parse_stored("player.role", &entity.role)?,
            academy_level: parse_stored("player.academy_level", &entity.academy_level)?,
            email_address: entity.email_address,
            cricclubs_id: entity.cricclubs_id,
            status: parse_stored("player.status", &entity.status)?,
            created_at: entity.created_at,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            player_id: self.player_id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            role: self.role.as_str().to_string(),
            academy_level: self.academy_level.as_str().to_string(),
            email_address: self.email_address,
            cricclubs_id: self.cricclubs_id,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Optional login for a new player; both halves or neither.
#[derive(Debug, Clone)]
pub struct PlayerCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub player_id: Option<String>,
    pub credentials: Option<PlayerCredentials>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub role: PlayerRole,
    pub academy_level: AcademyLevel,
    pub email_address: String,
    pub cricclubs_id: String,
    pub status: PlayerStatus,
}

impl CreatePlayerParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreatePlayerParams)` - Normalised parameters, status defaulting to Active
    /// - `Err(AppError::BadRequest)` - Blank field, age outside 1-100, bad email, unknown
    ///   enum value, or only one of username / password given
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, AppError> {
        let username = dto.username.filter(|u| !u.trim().is_empty());
        let password = dto.password.filter(|p| !p.is_empty());
        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(PlayerCredentials {
                username: validate::required("username", &username)?,
                password,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "username and password must be provided together".to_string(),
                ))
            }
        };

        Ok(Self {
            player_id: optional_external_id("playerId", dto.player_id)?,
            credentials,
            first_name: validate::required("firstName", &dto.first_name)?,
            last_name: validate::required("lastName", &dto.last_name)?,
            age: validate::in_range("age", dto.age, 1, 100)?,
            role: parse_enum(dto.role.trim())?,
            academy_level: parse_enum(dto.academy_level.trim())?,
            email_address: validate::email(&dto.email_address)?,
            cricclubs_id: validate::required("cricclubsId", &dto.cricclubs_id)?,
            status: match dto.status {
                Some(status) => parse_enum(status.trim())?,
                None => PlayerStatus::Active,
            },
        })
    }
}

/// Partial update, every present field revalidated.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerParams {
    pub player_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub role: Option<PlayerRole>,
    pub academy_level: Option<AcademyLevel>,
    pub email_address: Option<String>,
    pub cricclubs_id: Option<String>,
    pub status: Option<PlayerStatus>,
}

impl UpdatePlayerParams {
    pub fn from_dto(dto: UpdatePlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            player_id: dto
                .player_id
                .map(|id| validate::required("playerId", &id))
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
            age: dto
                .age
                .map(|age| validate::in_range("age", age, 1, 100))
                .transpose()?,
            role: dto.role.map(|r| parse_enum(r.trim())).transpose()?,
            academy_level: dto.academy_level.map(|l| parse_enum(l.trim())).transpose()?,
            email_address: dto.email_address.map(|e| validate::email(&e)).transpose()?,
            cricclubs_id: dto
                .cricclubs_id
                .map(|id| validate::required("cricclubsId", &id))
                .transpose()?,
            status: dto.status.map(|s| parse_enum(s.trim())).transpose()?,
        })
    }
}

/// A coach's note attached to a player.
#[derive(Debug, Clone)]
pub struct PlayerNote {
    pub id: i32,
    pub player_id: i32,
    pub coach_id: i32,
    pub coach_name: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl PlayerNote {
    pub fn from_entity(entity: entity::player_note::Model, coach_name: Option<String>) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            coach_id: entity.coach_id,
            coach_name,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PlayerNoteDto {
        PlayerNoteDto {
            id: self.id,
            player_id: self.player_id,
            coach_id: self.coach_id,
            coach_name: self.coach_name,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// One rated session, computed from the performance table joined with its session.
#[derive(Debug, Clone)]
pub struct PerformanceHistoryEntry {
    pub session_id: i32,
    pub date: DateTime<Utc>,
    /// The entry's own focus area when set, otherwise the session's.
    pub focus_area: FocusArea,
    pub rating: Rating,
    pub notes: Option<String>,
    pub player_response: Option<String>,
}

impl PerformanceHistoryEntry {
    pub fn new(entry: PerformanceEntry, session: &Session) -> Self {
        Self {
            session_id: session.id,
            date: session.date,
            focus_area: entry.focus_area.unwrap_or(session.focus_area),
            rating: entry.rating,
            notes: entry.notes,
            player_response: entry.player_response,
        }
    }

    pub fn into_dto(self) -> PerformanceHistoryDto {
        PerformanceHistoryDto {
            session_id: self.session_id,
            date: self.date,
            focus_area: self.focus_area.as_str().to_string(),
            rating: self.rating.into_dto(),
            notes: self.notes,
            player_response: self.player_response,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub player: Player,
    pub performance_history: Vec<PerformanceHistoryEntry>,
    pub coach_notes: Vec<PlayerNote>,
}

impl PlayerProfile {
    pub fn into_dto(self) -> PlayerProfileDto {
        PlayerProfileDto {
            player: self.player.into_dto(),
            performance_history: self
                .performance_history
                .into_iter()
                .map(PerformanceHistoryEntry::into_dto)
                .collect(),
            coach_notes: self.coach_notes.into_iter().map(PlayerNote::into_dto).collect(),
        }
    }
}

/// A session on a player's roster with that player's own entry, if any.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    pub session: Session,
    pub coach_name: String,
    pub entry: Option<PerformanceEntry>,
}

impl PlayerSession {
    pub fn into_dto(self) -> PlayerSessionDto {
        PlayerSessionDto {
            id: self.session.id,
            date: self.session.date,
            focus_area: self.session.focus_area.as_str().to_string(),
            coach_name: self.coach_name,
            notes: self.session.notes,
            status: self.session.status.as_str().to_string(),
            feedback: self.entry.map(PerformanceEntry::into_dto),
        }
    }
}
