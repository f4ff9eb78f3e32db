use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::player::PlayerNote;

pub struct PlayerNoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerNoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a note written by `coach_id` about `player_id`.
    ///
    /// # Returns
    /// - `Ok(PlayerNote)` - The created note, without the coach name resolved
    /// - `Err(DbErr)` - Database error, including unknown player or coach references
    pub async fn create(
        &self,
        player_id: i32,
        coach_id: i32,
        content: String,
    ) -> Result<PlayerNote, DbErr> {
        let entity = entity::player_note::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            coach_id: ActiveValue::Set(coach_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlayerNote::from_entity(entity, None))
    }

    /// Gets every note about a player, newest first, with the authoring coach's name.
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<PlayerNote>, DbErr> {
        let notes = entity::prelude::PlayerNote::find()
            .filter(entity::player_note::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::player_note::Column::CreatedAt)
            .order_by_desc(entity::player_note::Column::Id)
            .find_also_related(entity::prelude::Coach)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(note, coach)| {
                let coach_name = coach.map(|c| format!("{} {}", c.first_name, c.last_name));
                PlayerNote::from_entity(note, coach_name)
            })
            .collect();

        Ok(notes)
    }
}
