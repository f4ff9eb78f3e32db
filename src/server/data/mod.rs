//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Session and performance repositories are generic over the connection so they can
//! participate in a transaction opened by a service.

pub mod admin;
pub mod coach;
pub mod evaluation;
pub mod notification;
pub mod performance;
pub mod player;
pub mod player_note;
pub mod session;

#[cfg(test)]
mod test;
