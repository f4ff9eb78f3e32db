//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate request DTOs on the way in, so services only ever see
//! well-formed input.

pub mod admin;
pub mod auth;
pub mod coach;
pub mod dashboard;
pub mod enums;
pub mod evaluation;
pub mod notification;
pub mod performance;
pub mod player;
pub mod session;
pub mod stats;
