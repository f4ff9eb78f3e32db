use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    error::AppError, model::enums::Role, push::PushHub, router::router, state::AppState,
    util::token::TokenKeys,
};


const SECRET: &str = "controller-test-secret";

/// Nothing listens on port 1, so stats lookups fail fast.
const UNREACHABLE_STATS_SITE: &str = "http://127.0.0.1:1";

fn keys() -> TokenKeys {
    TokenKeys::new(SECRET, 3600)
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(
        db.clone(),
        keys(),
        PushHub::new(),
        reqwest::Client::new(),
        UNREACHABLE_STATS_SITE.to_string(),
    ))
}

fn token(id: i32, role: Role) -> String {
    keys().issue(id, role).unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request through the full router and decodes the JSON body.
async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = app(db)
        .oneshot(request(method, uri, token, body))
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice(&bytes).unwrap(),
    };

    (status, body)
}
