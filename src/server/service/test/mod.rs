use sea_orm::DatabaseConnection;
use test_utils::factory;

use crate::server::{
    error::AppError,
    model::{coach::Coach, player::Player},
};

mod admin;
mod auth;
mod coach;
mod dashboard;
mod evaluation;
mod feedback;
mod notification;
mod player;
mod session;

async fn coach(db: &DatabaseConnection) -> Result<Coach, AppError> {
    Ok(Coach::from_entity(factory::create_coach(db).await?)?)
}

async fn player(db: &DatabaseConnection) -> Result<Player, AppError> {
    Ok(Player::from_entity(factory::create_player(db).await?)?)
}
