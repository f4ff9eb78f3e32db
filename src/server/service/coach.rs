//! Coach management, the coach dashboard and notes on players.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        coach::CoachRepository, player::PlayerRepository, player_note::PlayerNoteRepository,
        session::SessionRepository,
    },
    error::AppError,
    model::{
        coach::{Coach, CoachDashboard, CreateCoachParams, UpdateCoachParams},
        player::PlayerNote,
    },
    util::{password::hash_password, validate},
};

pub struct CoachService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a coach, generating the external id when none was supplied.
    ///
    /// # Returns
    /// - `Ok(Coach)` - The created coach
    /// - `Err(AppError::BadRequest)` - Username or coach id already taken
    /// - `Err(AppError::PasswordErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_coach(&self, params: CreateCoachParams) -> Result<Coach, AppError> {
        let repo = CoachRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(username_taken(&params.username));
        }

        let coach_id = match params.coach_id.clone() {
            Some(coach_id) => {
                if repo.find_by_coach_id(&coach_id).await?.is_some() {
                    return Err(external_id_taken("Coach", &coach_id));
                }
                coach_id
            }
            None => repo.next_coach_id().await?,
        };

        let password_hash = hash_password(&params.password)?;
        let coach = repo.create(coach_id, password_hash, params).await?;

        tracing::info!("Created coach {} ({})", coach.coach_id, coach.username);

        Ok(coach)
    }

    /// Applies a partial update, re-hashing any new password.
    ///
    /// # Returns
    /// - `Ok(Coach)` - Updated coach
    /// - `Err(AppError::NotFound)` - No coach with that id
    /// - `Err(AppError::BadRequest)` - New username or coach id belongs to another coach
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_coach(&self, id: i32, params: UpdateCoachParams) -> Result<Coach, AppError> {
        let repo = CoachRepository::new(self.db);

        if let Some(username) = &params.username {
            if let Some(existing) = repo.find_by_username(username).await? {
                if existing.id != id {
                    return Err(username_taken(username));
                }
            }
        }
        if let Some(coach_id) = &params.coach_id {
            if let Some(existing) = repo.find_by_coach_id(coach_id).await? {
                if existing.id != id {
                    return Err(external_id_taken("Coach", coach_id));
                }
            }
        }

        let password_hash = params.password.as_deref().map(hash_password).transpose()?;

        repo.update(id, params, password_hash)
            .await?
            .ok_or_else(|| AppError::NotFound("Coach not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Coach>, AppError> {
        Ok(CoachRepository::new(self.db).get_all().await?)
    }

    /// Looks up a coach by external id.
    ///
    /// # Returns
    /// - `Ok(Coach)` - Matching coach
    /// - `Err(AppError::NotFound)` - No coach with that id
    pub async fn get_by_coach_id(&self, coach_id: &str) -> Result<Coach, AppError> {
        CoachRepository::new(self.db)
            .find_by_coach_id(coach_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coach not found".to_string()))
    }

    /// Builds the coach's landing page: totals and every owned session.
    pub async fn dashboard(&self, coach: Coach) -> Result<CoachDashboard, AppError> {
        let session_repo = SessionRepository::new(self.db);

        let sessions = session_repo.get_by_coach(coach.id, None).await?;
        let total_players = session_repo.count_players_for_coach(coach.id).await?;
        let sessions = session_repo.with_rosters(sessions).await?;

        Ok(CoachDashboard {
            total_sessions: sessions.len() as u64,
            total_players,
            sessions,
            coach,
        })
    }

    /// Appends a note about a player authored by `coach`.
    ///
    /// # Returns
    /// - `Ok(PlayerNote)` - The stored note with the coach name attached
    /// - `Err(AppError::BadRequest)` - Content is blank
    /// - `Err(AppError::NotFound)` - No player with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_player_note(
        &self,
        coach: &Coach,
        player_id: i32,
        content: &str,
    ) -> Result<PlayerNote, AppError> {
        let content = validate::required("content", content)?;

        if PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Player not found".to_string()));
        }

        let mut note = PlayerNoteRepository::new(self.db)
            .create(player_id, coach.id, content)
            .await?;
        note.coach_name = Some(coach.full_name());

        Ok(note)
    }
}

pub fn username_taken(username: &str) -> AppError {
    AppError::BadRequest(format!("Username '{}' is already taken", username))
}

pub fn external_id_taken(kind: &str, id: &str) -> AppError {
    AppError::BadRequest(format!("{} id '{}' is already taken", kind, id))
}
