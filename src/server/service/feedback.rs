//! Session feedback: coaches rate rostered players, players respond once.
//!
//! Entries live only in the performance table. Submissions and edits are applied in a
//! single transaction; notifications for a submission are created after commit so a
//! failed push can never undo stored feedback.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{performance::PerformanceRepository, session::SessionRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::Identity,
        coach::Coach,
        enums::NotificationKind,
        notification::{CreateNotificationParams, Recipient},
        performance::{FeedbackEntryParams, PerformanceEntry, SessionFeedback},
        player::Player,
        session::Session,
    },
    push::{PushHub, EVENT_NEW_FEEDBACK, EVENT_NEW_PLAYER_RESPONSE},
    service::notification::NotificationService,
    util::validate,
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
    push: &'a PushHub,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection, push: &'a PushHub) -> Self {
        Self { db, push }
    }

    /// Submits feedback for a session the coach owns.
    ///
    /// Entries are upserted in order, so a repeated player id keeps the last entry. The
    /// session is flagged as having feedback in the same transaction. Each entry then
    /// produces one notification to its player.
    ///
    /// # Arguments
    /// - `coach` - Caller
    /// - `session_id` - Target session
    /// - `entries` - Validated, non-empty entries
    ///
    /// # Returns
    /// - `Ok(SessionFeedback)` - Session with all of its entries after the write
    /// - `Err(AppError::NotFound)` - No such session
    /// - `Err(AppError::AuthErr(AccessDenied))` - Session belongs to another coach
    /// - `Err(AppError::BadRequest)` - An entry names a player outside the roster
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn submit(
        &self,
        coach: &Coach,
        session_id: i32,
        entries: Vec<FeedbackEntryParams>,
    ) -> Result<SessionFeedback, AppError> {
        let mut session = self.owned_session(coach, session_id).await?;
        self.ensure_on_roster(session.id, &entries).await?;

        let txn = self.db.begin().await?;
        let performance_repo = PerformanceRepository::new(&txn);
        for entry in &entries {
            performance_repo.upsert(session.id, entry).await?;
        }
        SessionRepository::new(&txn)
            .mark_feedback_submitted(session.id)
            .await?;
        txn.commit().await?;
        session.feedback_submitted = true;

        tracing::info!(
            "Coach {} submitted {} feedback entries for session {}",
            coach.id,
            entries.len(),
            session.id
        );

        let notifications = NotificationService::new(self.db, self.push);
        let message = format!(
            "Coach {} submitted feedback for your session.",
            coach.full_name()
        );
        for entry in &entries {
            notifications
                .notify(
                    CreateNotificationParams {
                        recipient: Recipient::player(entry.player_id),
                        sender_id: Some(coach.id),
                        kind: NotificationKind::FeedbackSubmitted,
                        session_id: Some(session.id),
                        player_id: None,
                        message: message.clone(),
                    },
                    EVENT_NEW_FEEDBACK,
                )
                .await?;
        }

        self.session_feedback(session).await
    }

    /// Replaces or appends entries without notifying anyone.
    ///
    /// The session's feedback flag is left as it is.
    ///
    /// # Returns
    /// Same as [`FeedbackService::submit`].
    pub async fn edit(
        &self,
        coach: &Coach,
        session_id: i32,
        entries: Vec<FeedbackEntryParams>,
    ) -> Result<SessionFeedback, AppError> {
        let session = self.owned_session(coach, session_id).await?;
        self.ensure_on_roster(session.id, &entries).await?;

        let txn = self.db.begin().await?;
        let performance_repo = PerformanceRepository::new(&txn);
        for entry in &entries {
            performance_repo.upsert(session.id, entry).await?;
        }
        txn.commit().await?;

        self.session_feedback(session).await
    }

    /// Stores a single entry for one rostered player.
    ///
    /// # Returns
    /// - `Ok(PerformanceEntry)` - The stored entry
    /// - `Err(AppError)` - Same failures as [`FeedbackService::submit`]
    pub async fn add_note(
        &self,
        coach: &Coach,
        session_id: i32,
        entry: FeedbackEntryParams,
    ) -> Result<PerformanceEntry, AppError> {
        let session = self.owned_session(coach, session_id).await?;
        self.ensure_on_roster(session.id, std::slice::from_ref(&entry))
            .await?;

        Ok(PerformanceRepository::new(self.db)
            .upsert(session.id, &entry)
            .await?)
    }

    /// Entries of one owned session with player names.
    pub async fn session_performance(
        &self,
        coach: &Coach,
        session_id: i32,
    ) -> Result<SessionFeedback, AppError> {
        let session = self.owned_session(coach, session_id).await?;

        self.session_feedback(session).await
    }

    /// Feedback visible to the caller.
    ///
    /// A coach sees every owned session with all of its entries, newest session first. A
    /// player sees only sessions holding an entry for them, reduced to that entry.
    ///
    /// # Returns
    /// - `Ok(Vec<SessionFeedback>)` - Visible sessions
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is an admin
    pub async fn feedback_for(
        &self,
        identity: &Identity,
    ) -> Result<Vec<SessionFeedback>, AppError> {
        let session_repo = SessionRepository::new(self.db);
        let performance_repo = PerformanceRepository::new(self.db);

        match identity {
            Identity::Coach(coach) => {
                let sessions = session_repo.get_by_coach(coach.id, None).await?;
                let ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
                let mut entries = performance_repo.get_by_sessions(&ids).await?;

                Ok(sessions
                    .into_iter()
                    .map(|session| SessionFeedback {
                        entries: entries.remove(&session.id).unwrap_or_default(),
                        session,
                    })
                    .collect())
            }
            Identity::Player(player) => {
                let sessions = session_repo.get_for_player(player.id).await?;
                let ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
                let mut entries = performance_repo.get_by_sessions(&ids).await?;

                Ok(sessions
                    .into_iter()
                    .filter_map(|session| {
                        let own: Vec<PerformanceEntry> = entries
                            .remove(&session.id)
                            .unwrap_or_default()
                            .into_iter()
                            .filter(|entry| entry.player_id == player.id)
                            .collect();
                        (!own.is_empty()).then_some(SessionFeedback {
                            session,
                            entries: own,
                        })
                    })
                    .collect())
            }
            Identity::Admin(_) => Err(AuthError::AccessDenied.into()),
        }
    }

    /// Records the player's single response to their entry and notifies the coach.
    ///
    /// # Returns
    /// - `Ok(PerformanceEntry)` - Entry with the response stored
    /// - `Err(AppError::NotFound)` - Session missing or no entry for this player
    /// - `Err(AppError::BadRequest)` - Blank response or already responded
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn respond(
        &self,
        player: &Player,
        session_id: i32,
        response: &str,
    ) -> Result<PerformanceEntry, AppError> {
        let session = SessionRepository::new(self.db)
            .find_by_id(session_id)
            .await?
            .ok_or_else(session_not_found)?;

        let performance_repo = PerformanceRepository::new(self.db);
        let entry = performance_repo
            .find(session.id, player.id)
            .await?
            .ok_or_else(|| AppError::NotFound("No feedback found for this player".to_string()))?;

        let response = validate::required("response", response)?;
        if entry.player_response.is_some() {
            return Err(already_responded());
        }

        let entry = performance_repo
            .set_response(entry.id, response)
            .await?
            .ok_or_else(already_responded)?;

        NotificationService::new(self.db, self.push)
            .notify(
                CreateNotificationParams {
                    recipient: Recipient::coach(session.coach_id),
                    sender_id: Some(player.id),
                    kind: NotificationKind::ResponseSubmitted,
                    session_id: Some(session.id),
                    player_id: Some(player.id),
                    message: format!("{} responded to your feedback.", player.full_name()),
                },
                EVENT_NEW_PLAYER_RESPONSE,
            )
            .await?;

        Ok(entry)
    }

    async fn owned_session(&self, coach: &Coach, session_id: i32) -> Result<Session, AppError> {
        let session = SessionRepository::new(self.db)
            .find_by_id(session_id)
            .await?
            .ok_or_else(session_not_found)?;

        if session.coach_id != coach.id {
            return Err(AuthError::AccessDenied.into());
        }

        Ok(session)
    }

    async fn ensure_on_roster(
        &self,
        session_id: i32,
        entries: &[FeedbackEntryParams],
    ) -> Result<(), AppError> {
        let roster = SessionRepository::new(self.db)
            .roster_ids(session_id)
            .await?;

        match entries.iter().find(|e| !roster.contains(&e.player_id)) {
            Some(entry) => Err(AppError::BadRequest(format!(
                "Player {} is not on the roster of session {}",
                entry.player_id, session_id
            ))),
            None => Ok(()),
        }
    }

    async fn session_feedback(&self, session: Session) -> Result<SessionFeedback, AppError> {
        let entries = PerformanceRepository::new(self.db)
            .get_by_session(session.id)
            .await?;

        Ok(SessionFeedback { session, entries })
    }
}

fn already_responded() -> AppError {
    AppError::BadRequest("A response has already been submitted".to_string())
}

fn session_not_found() -> AppError {
    AppError::NotFound("Session not found".to_string())
}
