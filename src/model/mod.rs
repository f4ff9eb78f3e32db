//! Wire-level request and response bodies.
//!
//! Every DTO serializes with camelCase field names and derives `ToSchema` so it appears
//! in the generated OpenAPI document.

pub mod admin;
pub mod api;
pub mod auth;
pub mod coach;
pub mod dashboard;
pub mod evaluation;
pub mod feedback;
pub mod notification;
pub mod player;
pub mod session;
pub mod stats;
