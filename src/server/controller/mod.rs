//! HTTP handlers: access control, DTO conversion and service calls.

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
