//! Structured evaluations and the player's single response to each.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        coach::CoachRepository,
        evaluation::{EvaluationRepository, NotifiedParty},
        player::PlayerRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::Identity,
        enums::NotificationKind,
        evaluation::{CreateEvaluationParams, Evaluation},
        notification::{CreateNotificationParams, Recipient},
        player::Player,
    },
    push::{PushHub, EVENT_NEW_EVALUATION, EVENT_NEW_PLAYER_RESPONSE},
    service::notification::NotificationService,
    util::validate,
};

pub struct EvaluationService<'a> {
    db: &'a DatabaseConnection,
    push: &'a PushHub,
}

impl<'a> EvaluationService<'a> {
    pub fn new(db: &'a DatabaseConnection, push: &'a PushHub) -> Self {
        Self { db, push }
    }

    /// Creates an evaluation and notifies the player.
    ///
    /// Coaches always evaluate as themselves; any `coach_id` they send is ignored.
    /// Admins must name the coach.
    ///
    /// # Arguments
    /// - `caller` - Coach or admin creating the evaluation
    /// - `params` - Validated evaluation
    ///
    /// # Returns
    /// - `Ok(Evaluation)` - Stored evaluation with names and `player_notified` set
    /// - `Err(AppError::BadRequest)` - Admin caller without a coach id
    /// - `Err(AppError::NotFound)` - Coach or player does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is a player
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        caller: &Identity,
        params: CreateEvaluationParams,
    ) -> Result<Evaluation, AppError> {
        let coach = match caller {
            Identity::Coach(coach) => coach.clone(),
            Identity::Admin(_) => {
                let coach_id = params.coach_id.ok_or_else(|| {
                    AppError::BadRequest("coachId is required".to_string())
                })?;
                CoachRepository::new(self.db)
                    .find_by_id(coach_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Coach not found".to_string()))?
            }
            Identity::Player(_) => return Err(AuthError::AccessDenied.into()),
        };

        let player = PlayerRepository::new(self.db)
            .find_by_id(params.player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        let repo = EvaluationRepository::new(self.db);
        let evaluation = repo
            .create(
                player.id,
                coach.id,
                params.feedback_json()?,
                params.categories_json()?,
                params.coach_comments,
            )
            .await?;

        tracing::info!(
            "Coach {} evaluated player {} (evaluation {})",
            coach.id,
            player.id,
            evaluation.id
        );

        NotificationService::new(self.db, self.push)
            .notify(
                CreateNotificationParams {
                    recipient: Recipient::player(player.id),
                    sender_id: Some(coach.id),
                    kind: NotificationKind::Evaluation,
                    session_id: None,
                    player_id: Some(player.id),
                    message: format!(
                        "Coach {} submitted a new evaluation for you.",
                        coach.full_name()
                    ),
                },
                EVENT_NEW_EVALUATION,
            )
            .await?;
        repo.mark_notified(evaluation.id, NotifiedParty::Player)
            .await?;

        self.reload(evaluation.id).await
    }

    /// Records the player's single response and notifies the evaluating coach.
    ///
    /// # Returns
    /// - `Ok(Evaluation)` - Updated evaluation with `coach_notified` set
    /// - `Err(AppError::NotFound)` - Missing or addressed to another player
    /// - `Err(AppError::BadRequest)` - Blank response or already responded
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn respond(
        &self,
        player: &Player,
        evaluation_id: i32,
        response: &str,
    ) -> Result<Evaluation, AppError> {
        let repo = EvaluationRepository::new(self.db);

        let evaluation = repo
            .find_by_id(evaluation_id)
            .await?
            .filter(|evaluation| evaluation.player_id == player.id)
            .ok_or_else(evaluation_not_found)?;

        let response = validate::required("playerResponse", response)?;
        if evaluation.player_responded {
            return Err(already_responded());
        }

        repo.set_response(evaluation.id, response)
            .await?
            .ok_or_else(already_responded)?;

        NotificationService::new(self.db, self.push)
            .notify(
                CreateNotificationParams {
                    recipient: Recipient::coach(evaluation.coach_id),
                    sender_id: Some(player.id),
                    kind: NotificationKind::PlayerResponse,
                    session_id: None,
                    player_id: Some(player.id),
                    message: format!("{} responded to your evaluation.", player.full_name()),
                },
                EVENT_NEW_PLAYER_RESPONSE,
            )
            .await?;
        repo.mark_notified(evaluation.id, NotifiedParty::Coach)
            .await?;

        self.reload(evaluation.id).await
    }

    /// Lists a player's evaluations, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Evaluation>)` - Evaluations, possibly empty
    /// - `Err(AppError::AuthErr(AccessDenied))` - A player asked for someone else's
    pub async fn list_by_player(
        &self,
        caller: &Identity,
        player_id: i32,
    ) -> Result<Vec<Evaluation>, AppError> {
        if let Identity::Player(player) = caller {
            if player.id != player_id {
                return Err(AuthError::AccessDenied.into());
            }
        }

        Ok(EvaluationRepository::new(self.db)
            .get_by_player(player_id)
            .await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Evaluation>, AppError> {
        Ok(EvaluationRepository::new(self.db).get_all().await?)
    }

    async fn reload(&self, id: i32) -> Result<Evaluation, AppError> {
        EvaluationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(evaluation_not_found)
    }
}

fn already_responded() -> AppError {
    AppError::BadRequest("A response has already been submitted".to_string())
}

fn evaluation_not_found() -> AppError {
    AppError::NotFound("Evaluation not found".to_string())
}
