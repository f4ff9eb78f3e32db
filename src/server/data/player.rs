//! Player repository.
//!
//! Handles player creation with external id generation, lookups by each unique key,
//! partial and status updates, and batch lookups used to resolve roster names.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    enums::PlayerStatus,
    player::{CreatePlayerParams, Player, UpdatePlayerParams},
};

/// First numeric suffix considered when generating `PLR####` ids.
const PLAYER_ID_BASE: u64 = 1000;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates the next free external player id.
    ///
    /// Starts from `PLR{1000 + count + 1}` and increments until the id is unused.
    ///
    /// # Returns
    /// - `Ok(String)` - Unused id such as `PLR1001`
    /// - `Err(DbErr)` - Database error during count or lookup
    pub async fn next_player_id(&self) -> Result<String, DbErr> {
        let count = entity::prelude::Player::find().count(self.db).await?;
        let mut number = PLAYER_ID_BASE + count + 1;

        loop {
            let candidate = format!("PLR{}", number);
            if self.find_by_player_id(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            number += 1;
        }
    }

    /// Inserts a player.
    ///
    /// # Arguments
    /// - `player_id` - External id, already resolved or generated
    /// - `login` - Username and password hash when the player can log in
    /// - `params` - Validated creation parameters
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        player_id: String,
        login: Option<(String, String)>,
        params: CreatePlayerParams,
    ) -> Result<Player, DbErr> {
        let (username, password_hash) = match login {
            Some((username, hash)) => (Some(username), Some(hash)),
            None => (None, None),
        };

        let entity = entity::player::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            age: ActiveValue::Set(params.age),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            academy_level: ActiveValue::Set(params.academy_level.as_str().to_string()),
            email_address: ActiveValue::Set(params.email_address),
            cricclubs_id: ActiveValue::Set(params.cricclubs_id),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Player::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        entity::prelude::Player::find_by_id(id)
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    pub async fn find_by_player_id(&self, player_id: &str) -> Result<Option<Player>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Player>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Username.eq(username))
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    /// Gets players by row id, ignoring ids that do not exist.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Player>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    /// Gets every player ordered by last then first name.
    pub async fn get_all(&self) -> Result<Vec<Player>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::LastName)
            .order_by_asc(entity::player::Column::FirstName)
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find().count(self.db).await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Updated player
    /// - `Ok(None)` - No player with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePlayerParams,
        password_hash: Option<String>,
    ) -> Result<Option<Player>, DbErr> {
        let Some(entity) = entity::prelude::Player::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(player_id) = params.player_id {
            active.player_id = ActiveValue::Set(player_id);
        }
        if let Some(username) = params.username {
            active.username = ActiveValue::Set(Some(username));
        }
        if let Some(hash) = password_hash {
            active.password_hash = ActiveValue::Set(Some(hash));
        }
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(age) = params.age {
            active.age = ActiveValue::Set(age);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(level) = params.academy_level {
            active.academy_level = ActiveValue::Set(level.as_str().to_string());
        }
        if let Some(email) = params.email_address {
            active.email_address = ActiveValue::Set(email);
        }
        if let Some(cricclubs_id) = params.cricclubs_id {
            active.cricclubs_id = ActiveValue::Set(cricclubs_id);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }

        let entity = active.update(self.db).await?;

        Player::from_entity(entity).map(Some)
    }

    /// Sets the player's status.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Updated player
    /// - `Ok(None)` - No player with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: PlayerStatus,
    ) -> Result<Option<Player>, DbErr> {
        let Some(entity) = entity::prelude::Player::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        let entity = active.update(self.db).await?;

        Player::from_entity(entity).map(Some)
    }

    /// Resolves display names for a set of player ids.
    pub async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        Ok(self
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|player| (player.id, player.full_name()))
            .collect())
    }
}
