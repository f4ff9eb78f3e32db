//! Evaluation repository.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::evaluation::Evaluation;

/// Column flags updated after a notification has been delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifiedParty {
    Player,
    Coach,
}

pub struct EvaluationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EvaluationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an evaluation dated now.
    ///
    /// # Arguments
    /// - `player_id` / `coach_id` - Existing player and coach row ids
    /// - `feedback` / `categories` - Serialized structured values
    /// - `coach_comments` - Optional free text
    ///
    /// # Returns
    /// - `Ok(Evaluation)` - The created evaluation without names resolved
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        player_id: i32,
        coach_id: i32,
        feedback: serde_json::Value,
        categories: serde_json::Value,
        coach_comments: Option<String>,
    ) -> Result<Evaluation, DbErr> {
        let entity = entity::evaluation::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            coach_id: ActiveValue::Set(coach_id),
            date_of_evaluation: ActiveValue::Set(Utc::now()),
            feedback: ActiveValue::Set(feedback),
            categories: ActiveValue::Set(categories),
            coach_comments: ActiveValue::Set(coach_comments),
            player_response: ActiveValue::Set(None),
            player_responded: ActiveValue::Set(false),
            coach_notified: ActiveValue::Set(false),
            player_notified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Evaluation::from_entity(entity, None, None)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Evaluation>, DbErr> {
        let Some(entity) = entity::prelude::Evaluation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut named = self.with_names(vec![entity]).await?;

        Ok(named.pop())
    }

    /// Gets a player's evaluations, newest first, with names resolved.
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<Evaluation>, DbErr> {
        let entities = entity::prelude::Evaluation::find()
            .filter(entity::evaluation::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::evaluation::Column::DateOfEvaluation)
            .order_by_desc(entity::evaluation::Column::Id)
            .all(self.db)
            .await?;

        self.with_names(entities).await
    }

    /// Gets every evaluation, newest first, with names resolved.
    pub async fn get_all(&self) -> Result<Vec<Evaluation>, DbErr> {
        let entities = entity::prelude::Evaluation::find()
            .order_by_desc(entity::evaluation::Column::DateOfEvaluation)
            .order_by_desc(entity::evaluation::Column::Id)
            .all(self.db)
            .await?;

        self.with_names(entities).await
    }

    /// Stores the player's response and marks the evaluation as responded.
    ///
    /// Only an evaluation without a response is updated, in a single conditional write.
    ///
    /// # Returns
    /// - `Ok(Some(Evaluation))` - Updated evaluation
    /// - `Ok(None)` - No evaluation with that id, or it was already responded to
    /// - `Err(DbErr)` - Database error
    pub async fn set_response(
        &self,
        id: i32,
        response: String,
    ) -> Result<Option<Evaluation>, DbErr> {
        let result = entity::prelude::Evaluation::update_many()
            .col_expr(
                entity::evaluation::Column::PlayerResponse,
                Expr::value(Some(response)),
            )
            .col_expr(entity::evaluation::Column::PlayerResponded, Expr::value(true))
            .filter(entity::evaluation::Column::Id.eq(id))
            .filter(entity::evaluation::Column::PlayerResponded.eq(false))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Sets the notified flag for one party.
    pub async fn mark_notified(&self, id: i32, party: NotifiedParty) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Evaluation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active = entity.into_active_model();
        match party {
            NotifiedParty::Player => active.player_notified = ActiveValue::Set(true),
            NotifiedParty::Coach => active.coach_notified = ActiveValue::Set(true),
        }
        active.update(self.db).await?;

        Ok(())
    }

    async fn with_names(
        &self,
        entities: Vec<entity::evaluation::Model>,
    ) -> Result<Vec<Evaluation>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let player_ids: HashSet<i32> = entities.iter().map(|e| e.player_id).collect();
        let coach_ids: HashSet<i32> = entities.iter().map(|e| e.coach_id).collect();

        let players: HashMap<i32, String> = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, format!("{} {}", p.first_name, p.last_name)))
            .collect();
        let coaches: HashMap<i32, String> = entity::prelude::Coach::find()
            .filter(entity::coach::Column::Id.is_in(coach_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, format!("{} {}", c.first_name, c.last_name)))
            .collect();

        entities
            .into_iter()
            .map(|entity| {
                let player_name = players.get(&entity.player_id).cloned();
                let coach_name = coaches.get(&entity.coach_id).cloned();
                Evaluation::from_entity(entity, player_name, coach_name)
            })
            .collect()
    }
}
