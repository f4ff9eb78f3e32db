//! Player management and the player's own views.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        coach::CoachRepository, performance::PerformanceRepository, player::PlayerRepository,
        player_note::PlayerNoteRepository, session::SessionRepository,
    },
    error::AppError,
    model::{
        enums::PlayerStatus,
        player::{
            CreatePlayerParams, PerformanceHistoryEntry, Player, PlayerProfile, PlayerSession,
            UpdatePlayerParams,
        },
    },
    service::coach::{external_id_taken, username_taken},
    util::password::hash_password,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player, generating the external id when none was supplied.
    ///
    /// Players created without credentials exist on rosters but cannot log in.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(AppError::BadRequest)` - Username or player id already taken
    /// - `Err(AppError::PasswordErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_player(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        if let Some(credentials) = &params.credentials {
            if repo.find_by_username(&credentials.username).await?.is_some() {
                return Err(username_taken(&credentials.username));
            }
        }

        let player_id = match params.player_id.clone() {
            Some(player_id) => {
                if repo.find_by_player_id(&player_id).await?.is_some() {
                    return Err(external_id_taken("Player", &player_id));
                }
                player_id
            }
            None => repo.next_player_id().await?,
        };

        let login = match &params.credentials {
            Some(credentials) => Some((
                credentials.username.clone(),
                hash_password(&credentials.password)?,
            )),
            None => None,
        };

        let player = repo.create(player_id, login, params).await?;

        tracing::info!("Created player {}", player.player_id);

        Ok(player)
    }

    /// Applies a partial update, re-hashing any new password.
    ///
    /// # Returns
    /// - `Ok(Player)` - Updated player
    /// - `Err(AppError::NotFound)` - No player with that id
    /// - `Err(AppError::BadRequest)` - New username or player id belongs to another player
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_player(
        &self,
        id: i32,
        params: UpdatePlayerParams,
    ) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        if let Some(username) = &params.username {
            if let Some(existing) = repo.find_by_username(username).await? {
                if existing.id != id {
                    return Err(username_taken(username));
                }
            }
        }
        if let Some(player_id) = &params.player_id {
            if let Some(existing) = repo.find_by_player_id(player_id).await? {
                if existing.id != id {
                    return Err(external_id_taken("Player", player_id));
                }
            }
        }

        let password_hash = params.password.as_deref().map(hash_password).transpose()?;

        repo.update(id, params, password_hash)
            .await?
            .ok_or_else(player_not_found)
    }

    pub async fn get_all(&self) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_all().await?)
    }

    /// Looks up a player by external id.
    ///
    /// # Returns
    /// - `Ok(Player)` - Matching player
    /// - `Err(AppError::NotFound)` - No player with that id
    pub async fn get_by_player_id(&self, player_id: &str) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_player_id(player_id)
            .await?
            .ok_or_else(player_not_found)
    }

    pub async fn update_status(&self, id: i32, status: PlayerStatus) -> Result<Player, AppError> {
        let player = PlayerRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(player_not_found)?;

        tracing::info!("Player {} is now {}", player.player_id, status);

        Ok(player)
    }

    /// Builds the player's own profile.
    ///
    /// History is computed from performance entries joined with their sessions, newest
    /// session first. Coach notes are newest first.
    pub async fn profile(&self, player: Player) -> Result<PlayerProfile, AppError> {
        let performance_history = PerformanceRepository::new(self.db)
            .get_history(player.id, None)
            .await?
            .into_iter()
            .map(|(entry, session)| PerformanceHistoryEntry::new(entry, &session))
            .collect();
        let coach_notes = PlayerNoteRepository::new(self.db)
            .get_by_player(player.id)
            .await?;

        Ok(PlayerProfile {
            player,
            performance_history,
            coach_notes,
        })
    }

    /// Lists sessions whose roster contains the player, newest first, each with the
    /// player's own entry when one exists.
    pub async fn sessions(&self, player: &Player) -> Result<Vec<PlayerSession>, AppError> {
        let sessions = SessionRepository::new(self.db)
            .get_for_player(player.id)
            .await?;

        let session_ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
        let mut entries = PerformanceRepository::new(self.db)
            .get_by_sessions(&session_ids)
            .await?;

        let coach_ids: Vec<i32> = sessions.iter().map(|s| s.coach_id).collect();
        let coach_names = CoachRepository::new(self.db)
            .names_by_ids(&coach_ids)
            .await?;

        Ok(sessions
            .into_iter()
            .map(|session| {
                let entry = entries
                    .remove(&session.id)
                    .and_then(|list| list.into_iter().find(|e| e.player_id == player.id));
                PlayerSession {
                    coach_name: coach_names
                        .get(&session.coach_id)
                        .cloned()
                        .unwrap_or_default(),
                    entry,
                    session,
                }
            })
            .collect())
    }
}

fn player_not_found() -> AppError {
    AppError::NotFound("Player not found".to_string())
}
