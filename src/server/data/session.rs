//! Session repository.
//!
//! Sessions and their roster rows are written together, so the repository is generic
//! over the connection and can run inside a caller's transaction. Read helpers resolve
//! coach names and rosters for the list views.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::{
    enums::{FocusArea, SessionStatus},
    session::{NewSession, RosterPlayer, Session, SessionWithRoster},
};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a session and its roster rows.
    ///
    /// # Arguments
    /// - `session` - Row to insert, with an optional recurrence descriptor
    /// - `player_ids` - Roster; ids must reference existing players
    ///
    /// # Returns
    /// - `Ok(Session)` - The created session
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, session: NewSession, player_ids: &[i32]) -> Result<Session, DbErr> {
        let recurrence = session.recurrence;
        let entity = entity::session::ActiveModel {
            date: ActiveValue::Set(session.date),
            focus_area: ActiveValue::Set(session.focus_area.as_str().to_string()),
            coach_id: ActiveValue::Set(session.coach_id),
            notes: ActiveValue::Set(session.notes),
            status: ActiveValue::Set(SessionStatus::Active.as_str().to_string()),
            feedback_submitted: ActiveValue::Set(false),
            is_recurring: ActiveValue::Set(recurrence.is_some()),
            day_of_week: ActiveValue::Set(
                recurrence.as_ref().map(|r| r.day_of_week.as_str().to_string()),
            ),
            time: ActiveValue::Set(
                recurrence
                    .as_ref()
                    .map(|r| r.time.format("%H:%M").to_string()),
            ),
            duration_minutes: ActiveValue::Set(recurrence.as_ref().map(|r| r.duration_minutes)),
            recurrence_group_id: ActiveValue::Set(recurrence.map(|r| r.group_id)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for player_id in player_ids {
            entity::session_player::ActiveModel {
                session_id: ActiveValue::Set(entity.id),
                player_id: ActiveValue::Set(*player_id),
            }
            .insert(self.db)
            .await?;
        }

        Session::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Session>, DbErr> {
        entity::prelude::Session::find_by_id(id)
            .one(self.db)
            .await?
            .map(Session::from_entity)
            .transpose()
    }

    /// Gets every session ordered by date, earliest first.
    pub async fn get_all(&self) -> Result<Vec<Session>, DbErr> {
        entity::prelude::Session::find()
            .order_by_asc(entity::session::Column::Date)
            .all(self.db)
            .await?
            .into_iter()
            .map(Session::from_entity)
            .collect()
    }

    /// Gets sessions owned by a coach, newest first.
    ///
    /// # Arguments
    /// - `coach_id` - Owning coach
    /// - `limit` - Optional maximum number of sessions
    pub async fn get_by_coach(
        &self,
        coach_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Session>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::CoachId.eq(coach_id))
            .order_by_desc(entity::session::Column::Date)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Session::from_entity)
            .collect()
    }

    /// Gets sessions whose roster contains the player, newest first.
    pub async fn get_for_player(&self, player_id: i32) -> Result<Vec<Session>, DbErr> {
        entity::prelude::Session::find()
            .join(
                JoinType::InnerJoin,
                entity::session::Relation::SessionPlayer.def(),
            )
            .filter(entity::session_player::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::session::Column::Date)
            .all(self.db)
            .await?
            .into_iter()
            .map(Session::from_entity)
            .collect()
    }

    /// Gets sessions starting within `[from, to)`, earliest first.
    pub async fn get_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Session>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::Date.gte(from))
            .filter(entity::session::Column::Date.lt(to))
            .order_by_asc(entity::session::Column::Date)
            .all(self.db)
            .await?
            .into_iter()
            .map(Session::from_entity)
            .collect()
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Session::find().count(self.db).await
    }

    pub async fn count_by_coach(&self, coach_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::CoachId.eq(coach_id))
            .count(self.db)
            .await
    }

    pub async fn count_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::Date.gte(from))
            .filter(entity::session::Column::Date.lt(to))
            .count(self.db)
            .await
    }

    /// Counts sessions per focus area; areas without sessions are omitted.
    pub async fn count_by_focus_area(&self) -> Result<Vec<(FocusArea, u64)>, DbErr> {
        let mut counts = Vec::new();
        for focus_area in FocusArea::ALL {
            let count = entity::prelude::Session::find()
                .filter(entity::session::Column::FocusArea.eq(focus_area.as_str()))
                .count(self.db)
                .await?;
            if count > 0 {
                counts.push((*focus_area, count));
            }
        }

        Ok(counts)
    }

    /// Counts distinct players across every roster of a coach's sessions.
    pub async fn count_players_for_coach(&self, coach_id: i32) -> Result<u64, DbErr> {
        let players: HashSet<i32> = entity::prelude::SessionPlayer::find()
            .join(
                JoinType::InnerJoin,
                entity::session_player::Relation::Session.def(),
            )
            .filter(entity::session::Column::CoachId.eq(coach_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.player_id)
            .collect();

        Ok(players.len() as u64)
    }

    /// Gets the roster player ids of a session.
    pub async fn roster_ids(&self, session_id: i32) -> Result<Vec<i32>, DbErr> {
        let ids = entity::prelude::SessionPlayer::find()
            .filter(entity::session_player::Column::SessionId.eq(session_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.player_id)
            .collect();

        Ok(ids)
    }

    /// Marks the session as having had feedback submitted.
    pub async fn mark_feedback_submitted(&self, session_id: i32) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Session::find_by_id(session_id)
            .one(self.db)
            .await?
        else {
            return Err(DbErr::RecordNotFound(format!(
                "session {} not found",
                session_id
            )));
        };

        let mut active = entity.into_active_model();
        active.feedback_submitted = ActiveValue::Set(true);
        active.update(self.db).await?;

        Ok(())
    }

    /// Resolves coach names and rosters for a list of sessions, keeping order.
    pub async fn with_rosters(
        &self,
        sessions: Vec<Session>,
    ) -> Result<Vec<SessionWithRoster>, DbErr> {
        if sessions.is_empty() {
            return Ok(Vec::new());
        }

        let session_ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
        let coach_ids: Vec<i32> = sessions
            .iter()
            .map(|s| s.coach_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let coach_names: HashMap<i32, String> = entity::prelude::Coach::find()
            .filter(entity::coach::Column::Id.is_in(coach_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|coach| (coach.id, format!("{} {}", coach.first_name, coach.last_name)))
            .collect();

        let mut rosters: HashMap<i32, Vec<RosterPlayer>> = HashMap::new();
        let rows = entity::prelude::SessionPlayer::find()
            .filter(entity::session_player::Column::SessionId.is_in(session_ids))
            .find_also_related(entity::prelude::Player)
            .all(self.db)
            .await?;
        for (row, player) in rows {
            if let Some(player) = player {
                rosters.entry(row.session_id).or_default().push(RosterPlayer {
                    id: player.id,
                    player_id: player.player_id,
                    name: format!("{} {}", player.first_name, player.last_name),
                });
            }
        }

        Ok(sessions
            .into_iter()
            .map(|session| {
                let mut players = rosters.remove(&session.id).unwrap_or_default();
                players.sort_by(|a, b| a.name.cmp(&b.name));
                SessionWithRoster {
                    coach_name: coach_names.get(&session.coach_id).cloned(),
                    players,
                    session,
                }
            })
            .collect())
    }
}
