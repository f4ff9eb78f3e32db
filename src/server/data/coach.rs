//! Coach repository.
//!
//! Handles coach creation with external id generation, lookups by each unique key,
//! partial updates and name resolution for views that denormalise coach names.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::coach::{Coach, CreateCoachParams, UpdateCoachParams};

/// First numeric suffix considered when generating `CCH####` ids.
const COACH_ID_BASE: u64 = 1000;

pub struct CoachRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates the next free external coach id.
    ///
    /// Starts from `CCH{1000 + count + 1}` and increments until the id is unused, so
    /// deletions never cause a collision.
    ///
    /// # Returns
    /// - `Ok(String)` - Unused id such as `CCH1003`
    /// - `Err(DbErr)` - Database error during count or lookup
    pub async fn next_coach_id(&self) -> Result<String, DbErr> {
        let count = entity::prelude::Coach::find().count(self.db).await?;
        let mut number = COACH_ID_BASE + count + 1;

        loop {
            let candidate = format!("CCH{}", number);
            if self.find_by_coach_id(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            number += 1;
        }
    }

    /// Inserts a coach.
    ///
    /// # Arguments
    /// - `coach_id` - External id, already resolved or generated
    /// - `password_hash` - Hashed password
    /// - `params` - Validated creation parameters
    ///
    /// # Returns
    /// - `Ok(Coach)` - The created coach
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        coach_id: String,
        password_hash: String,
        params: CreateCoachParams,
    ) -> Result<Coach, DbErr> {
        let entity = entity::coach::ActiveModel {
            coach_id: ActiveValue::Set(coach_id),
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            specialty: ActiveValue::Set(params.specialty.as_str().to_string()),
            experience_years: ActiveValue::Set(params.experience_years),
            email_address: ActiveValue::Set(params.email_address),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Coach::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Coach>, DbErr> {
        entity::prelude::Coach::find_by_id(id)
            .one(self.db)
            .await?
            .map(Coach::from_entity)
            .transpose()
    }

    pub async fn find_by_coach_id(&self, coach_id: &str) -> Result<Option<Coach>, DbErr> {
        entity::prelude::Coach::find()
            .filter(entity::coach::Column::CoachId.eq(coach_id))
            .one(self.db)
            .await?
            .map(Coach::from_entity)
            .transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Coach>, DbErr> {
        entity::prelude::Coach::find()
            .filter(entity::coach::Column::Username.eq(username))
            .one(self.db)
            .await?
            .map(Coach::from_entity)
            .transpose()
    }

    /// Gets every coach ordered by last then first name.
    pub async fn get_all(&self) -> Result<Vec<Coach>, DbErr> {
        entity::prelude::Coach::find()
            .order_by_asc(entity::coach::Column::LastName)
            .order_by_asc(entity::coach::Column::FirstName)
            .all(self.db)
            .await?
            .into_iter()
            .map(Coach::from_entity)
            .collect()
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Coach::find().count(self.db).await
    }

    /// Applies a partial update.
    ///
    /// # Arguments
    /// - `id` - Coach row id
    /// - `params` - Fields to change; `None` leaves a column untouched
    /// - `password_hash` - New hash when the update carried a password
    ///
    /// # Returns
    /// - `Ok(Some(Coach))` - Updated coach
    /// - `Ok(None)` - No coach with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCoachParams,
        password_hash: Option<String>,
    ) -> Result<Option<Coach>, DbErr> {
        let Some(entity) = entity::prelude::Coach::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(coach_id) = params.coach_id {
            active.coach_id = ActiveValue::Set(coach_id);
        }
        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(hash) = password_hash {
            active.password_hash = ActiveValue::Set(hash);
        }
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(specialty) = params.specialty {
            active.specialty = ActiveValue::Set(specialty.as_str().to_string());
        }
        if let Some(years) = params.experience_years {
            active.experience_years = ActiveValue::Set(years);
        }
        if let Some(email) = params.email_address {
            active.email_address = ActiveValue::Set(email);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }

        let entity = active.update(self.db).await?;

        Coach::from_entity(entity).map(Some)
    }

    /// Resolves display names for a set of coach ids.
    ///
    /// Ids without a matching coach are absent from the map.
    pub async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let names = entity::prelude::Coach::find()
            .filter(entity::coach::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|coach| (coach.id, format!("{} {}", coach.first_name, coach.last_name)))
            .collect();

        Ok(names)
    }
}
