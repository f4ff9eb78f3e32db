//! Admin account repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::admin::Admin;

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an admin with an already hashed password.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The created admin
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(&self, username: String, password_hash: String) -> Result<Admin, DbErr> {
        let entity = entity::admin::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Admin::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }

    /// Checks whether any admin account exists; used to bootstrap the first one.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find().count(self.db).await?;

        Ok(count > 0)
    }
}
