//! Session scheduling, single and weekly recurring.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{coach::CoachRepository, player::PlayerRepository, session::SessionRepository},
    error::AppError,
    model::session::{
        CreateRecurringSessionParams, CreateSessionParams, NewSession, SessionWithRoster,
    },
};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every session, earliest first, with coach name and roster.
    pub async fn get_all(&self) -> Result<Vec<SessionWithRoster>, AppError> {
        let repo = SessionRepository::new(self.db);
        let sessions = repo.get_all().await?;

        Ok(repo.with_rosters(sessions).await?)
    }

    /// Creates a single session with its roster.
    ///
    /// # Returns
    /// - `Ok(SessionWithRoster)` - The created session
    /// - `Err(AppError::NotFound)` - Coach or a roster player does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateSessionParams) -> Result<SessionWithRoster, AppError> {
        self.ensure_participants_exist(params.coach_id, &params.player_ids)
            .await?;

        let txn = self.db.begin().await?;
        let session = SessionRepository::new(&txn)
            .create(NewSession::from(&params), &params.player_ids)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Created {} session {} for coach {}",
            session.focus_area,
            session.id,
            session.coach_id
        );

        let mut created = SessionRepository::new(self.db)
            .with_rosters(vec![session])
            .await?;

        created
            .pop()
            .ok_or_else(|| AppError::InternalError("Created session vanished".to_string()))
    }

    /// Creates every weekly occurrence of a recurring session in one transaction.
    ///
    /// All occurrences share a freshly generated recurrence group id.
    ///
    /// # Returns
    /// - `Ok(Vec<SessionWithRoster>)` - Created sessions in date order
    /// - `Err(AppError::NotFound)` - Coach or a roster player does not exist
    /// - `Err(AppError::InternalErr)` - An occurrence date overflowed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_recurring(
        &self,
        params: CreateRecurringSessionParams,
    ) -> Result<Vec<SessionWithRoster>, AppError> {
        self.ensure_participants_exist(params.coach_id, &params.player_ids)
            .await?;

        let group_id = uuid::Uuid::new_v4().to_string();
        let occurrences = params.expand(&group_id)?;

        let txn = self.db.begin().await?;
        let repo = SessionRepository::new(&txn);
        let mut sessions = Vec::with_capacity(occurrences.len());
        for occurrence in occurrences {
            sessions.push(repo.create(occurrence, &params.player_ids).await?);
        }
        txn.commit().await?;

        tracing::info!(
            "Created {} recurring sessions in group {}",
            sessions.len(),
            group_id
        );

        Ok(SessionRepository::new(self.db).with_rosters(sessions).await?)
    }

    async fn ensure_participants_exist(
        &self,
        coach_id: i32,
        player_ids: &[i32],
    ) -> Result<(), AppError> {
        if CoachRepository::new(self.db)
            .find_by_id(coach_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Coach not found".to_string()));
        }

        let found = PlayerRepository::new(self.db).find_by_ids(player_ids).await?;
        if let Some(missing) = player_ids
            .iter()
            .find(|id| !found.iter().any(|player| player.id == **id))
        {
            return Err(AppError::NotFound(format!("Player {} not found", missing)));
        }

        Ok(())
    }
}
