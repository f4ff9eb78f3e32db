use std::{convert::Infallible, time::Duration};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{
        sse::{Event, KeepAlive},
        IntoResponse, Sse,
    },
    Json,
};
use futures::stream::Stream;
use serde::Deserialize;
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::NotificationDto,
    },
    server::{
        error::AppError,
        middleware::auth::{bearer_token, AuthGuard},
        model::{
            enums::Role,
            notification::{Notification, Recipient},
        },
        service::notification::NotificationService,
        state::AppState,
        util::extract::{AppPath, AppQuery},
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

const ANY_ROLE: &[Role] = &[Role::Admin, Role::Coach, Role::Player];

/// Query fallback for clients that cannot set an `Authorization` header.
#[derive(Deserialize)]
pub struct StreamParams {
    pub access_token: Option<String>,
}

/// List the caller's notifications, newest first.
///
/// # Access Control
/// - Any authenticated role
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Own notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, ANY_ROLE)
        .await?;

    let notifications = NotificationService::new(&state.db, &state.push)
        .list(Recipient::from(&identity))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Mark one of the caller's notifications read.
///
/// # Access Control
/// - Any authenticated role, for notifications addressed to them
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `404 Not Found` - Missing or addressed to someone else
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Marked read", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, ANY_ROLE)
        .await?;

    let notification = NotificationService::new(&state.db, &state.push)
        .mark_read(id, Recipient::from(&identity))
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Delete one of the caller's notifications.
///
/// # Access Control
/// - Any authenticated role, for notifications addressed to them
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, ANY_ROLE)
        .await?;

    NotificationService::new(&state.db, &state.push)
        .delete(id, Recipient::from(&identity))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Notification deleted".to_string(),
        }),
    ))
}

/// Open the caller's real-time notification channel.
///
/// Server-Sent Events named `new-feedback`, `new-player-response` and `new-evaluation`,
/// each carrying the stored notification as JSON. Only events addressed to the caller
/// are delivered. The token may be passed as `?access_token=` when headers cannot be set.
///
/// # Access Control
/// - Any authenticated role
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    params(("access_token" = Option<String>, Query, description = "Token when no Authorization header is sent")),
    responses(
        (status = 200, description = "Event stream", content_type = "text/event-stream"),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn notification_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<StreamParams>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let token = bearer_token(&headers).or(params.access_token.as_deref());
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require_token(token, ANY_ROLE)
        .await?;
    let recipient = Recipient::from(&identity);

    tracing::info!(
        "Push stream opened for {} {}",
        recipient.role,
        recipient.id
    );

    let stream = BroadcastStream::new(state.push.subscribe()).filter_map(move |result| {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Push stream for {} {} lagged: {}", recipient.role, recipient.id, e);
                return None;
            }
        };

        (event.recipient == recipient).then(|| {
            Ok(Event::default()
                .event(event.event)
                .data(event.payload.to_string()))
        })
    });

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    ))
}
