//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls, notifications and pushes
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling multi-step writes that must succeed together

pub mod admin;
pub mod auth;
pub mod coach;
pub mod dashboard;
pub mod evaluation;
pub mod feedback;
pub mod notification;
pub mod player;
pub mod session;
pub mod stats;

#[cfg(test)]
mod test;
