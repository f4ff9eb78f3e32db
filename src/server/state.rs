//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{push::PushHub, util::token::TokenKeys};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenKeys` keeps its keys behind an `Arc`
/// - `PushHub` wraps a broadcast sender
/// - `reqwest::Client` uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and verification keys for bearer tokens.
    pub tokens: TokenKeys,

    /// Real-time channel for notification pushes.
    pub push: PushHub,

    /// HTTP client used for the external stats lookup.
    ///
    /// Configured without redirects so a lookup can only reach the configured site.
    pub http_client: reqwest::Client,

    /// Base URL of the external stats site.
    pub cricclubs_base_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token keys
    /// - `push` - Notification push hub
    /// - `http_client` - HTTP client for external requests
    /// - `cricclubs_base_url` - Base URL of the external stats site
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenKeys,
        push: PushHub,
        http_client: reqwest::Client,
        cricclubs_base_url: String,
    ) -> Self {
        Self {
            db,
            tokens,
            push,
            http_client,
            cricclubs_base_url,
        }
    }
}
