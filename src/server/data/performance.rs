//! Performance entry repository.
//!
//! The performance table is the only store of per-player session feedback. Player
//! history views are computed from it by joining with the session table.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    performance::{FeedbackEntryParams, PerformanceEntry},
    session::Session,
};

pub struct PerformanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PerformanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or replaces the entry for (session, player).
    ///
    /// Rating, notes and focus area are overwritten; an existing player response is
    /// kept.
    ///
    /// # Returns
    /// - `Ok(PerformanceEntry)` - The stored entry
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(
        &self,
        session_id: i32,
        entry: &FeedbackEntryParams,
    ) -> Result<PerformanceEntry, DbErr> {
        let now = Utc::now();
        let existing = self.find_entity(session_id, entry.player_id).await?;

        let stored = match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                active.batting = ActiveValue::Set(entry.rating.batting);
                active.bowling = ActiveValue::Set(entry.rating.bowling);
                active.wicketkeeping = ActiveValue::Set(entry.rating.wicketkeeping);
                active.fielding = ActiveValue::Set(entry.rating.fielding);
                active.notes = ActiveValue::Set(entry.notes.clone());
                active.focus_area =
                    ActiveValue::Set(entry.focus_area.map(|area| area.as_str().to_string()));
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::performance::ActiveModel {
                    session_id: ActiveValue::Set(session_id),
                    player_id: ActiveValue::Set(entry.player_id),
                    batting: ActiveValue::Set(entry.rating.batting),
                    bowling: ActiveValue::Set(entry.rating.bowling),
                    wicketkeeping: ActiveValue::Set(entry.rating.wicketkeeping),
                    fielding: ActiveValue::Set(entry.rating.fielding),
                    notes: ActiveValue::Set(entry.notes.clone()),
                    focus_area: ActiveValue::Set(
                        entry.focus_area.map(|area| area.as_str().to_string()),
                    ),
                    player_response: ActiveValue::Set(None),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        PerformanceEntry::from_entity(stored, None)
    }

    /// Finds the entry for (session, player).
    pub async fn find(
        &self,
        session_id: i32,
        player_id: i32,
    ) -> Result<Option<PerformanceEntry>, DbErr> {
        self.find_entity(session_id, player_id)
            .await?
            .map(|model| PerformanceEntry::from_entity(model, None))
            .transpose()
    }

    async fn find_entity(
        &self,
        session_id: i32,
        player_id: i32,
    ) -> Result<Option<entity::performance::Model>, DbErr> {
        entity::prelude::Performance::find()
            .filter(entity::performance::Column::SessionId.eq(session_id))
            .filter(entity::performance::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Gets the entries of several sessions with player names, grouped by session id.
    pub async fn get_by_sessions(
        &self,
        session_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<PerformanceEntry>>, DbErr> {
        if session_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Performance::find()
            .filter(entity::performance::Column::SessionId.is_in(session_ids.to_vec()))
            .order_by_asc(entity::performance::Column::Id)
            .find_also_related(entity::prelude::Player)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<PerformanceEntry>> = HashMap::new();
        for (model, player) in rows {
            let name = player.map(|p| format!("{} {}", p.first_name, p.last_name));
            let entry = PerformanceEntry::from_entity(model, name)?;
            grouped.entry(entry.session_id).or_default().push(entry);
        }

        Ok(grouped)
    }

    /// Gets the entries of one session with player names.
    pub async fn get_by_session(&self, session_id: i32) -> Result<Vec<PerformanceEntry>, DbErr> {
        let mut grouped = self.get_by_sessions(&[session_id]).await?;

        Ok(grouped.remove(&session_id).unwrap_or_default())
    }

    /// Gets a player's entries joined with their sessions, most recent session first.
    ///
    /// # Arguments
    /// - `player_id` - Player row id
    /// - `limit` - Optional maximum number of entries
    pub async fn get_history(
        &self,
        player_id: i32,
        limit: Option<usize>,
    ) -> Result<Vec<(PerformanceEntry, Session)>, DbErr> {
        let rows = entity::prelude::Performance::find()
            .filter(entity::performance::Column::PlayerId.eq(player_id))
            .find_also_related(entity::prelude::Session)
            .all(self.db)
            .await?;

        let mut history = Vec::with_capacity(rows.len());
        for (model, session) in rows {
            if let Some(session) = session {
                history.push((
                    PerformanceEntry::from_entity(model, None)?,
                    Session::from_entity(session)?,
                ));
            }
        }
        history.sort_by(|(_, a), (_, b)| b.date.cmp(&a.date));
        if let Some(limit) = limit {
            history.truncate(limit);
        }

        Ok(history)
    }

    pub async fn count_by_session(&self, session_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Performance::find()
            .filter(entity::performance::Column::SessionId.eq(session_id))
            .count(self.db)
            .await
    }

    /// Stores the player's response unless one is already present.
    ///
    /// The write is a single conditional update, so concurrent responses to the same
    /// entry cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(Some(PerformanceEntry))` - The entry with the response stored
    /// - `Ok(None)` - No entry with that id, or it already has a response
    /// - `Err(DbErr)` - Database error
    pub async fn set_response(
        &self,
        id: i32,
        response: String,
    ) -> Result<Option<PerformanceEntry>, DbErr> {
        let result = entity::prelude::Performance::update_many()
            .col_expr(
                entity::performance::Column::PlayerResponse,
                Expr::value(Some(response)),
            )
            .col_expr(entity::performance::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::performance::Column::Id.eq(id))
            .filter(entity::performance::Column::PlayerResponse.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let Some(model) = entity::prelude::Performance::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        PerformanceEntry::from_entity(model, None).map(Some)
    }
}
