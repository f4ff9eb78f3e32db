use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        session::{CreateRecurringSessionDto, CreateSessionDto, SessionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::session::{CreateRecurringSessionParams, CreateSessionParams, SessionWithRoster},
        service::session::SessionService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// List every session with coach name and roster.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = SESSION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All sessions", body = Vec<SessionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let sessions = SessionService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            sessions
                .into_iter()
                .map(SessionWithRoster::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Schedule a single session.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The session with its roster
/// - `400 Bad Request` - Unknown focus area or malformed body
/// - `404 Not Found` - Coach or a rostered player does not exist
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = SESSION_TAG,
    security(("bearer" = [])),
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session created", body = SessionDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Coach or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let params = CreateSessionParams::from_dto(payload)?;
    let session = SessionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Schedule a weekly series of sessions.
///
/// The first occurrence falls on the first `dayOfWeek` on or after `startDate`, at
/// `time` UTC. Every occurrence shares a freshly generated recurrence group id.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Every created session, in date order
/// - `400 Bad Request` - Bad time, day, focus area, or occurrence count
/// - `404 Not Found` - Coach or a rostered player does not exist
#[utoipa::path(
    post,
    path = "/api/sessions/recurring",
    tag = SESSION_TAG,
    security(("bearer" = [])),
    request_body = CreateRecurringSessionDto,
    responses(
        (status = 201, description = "Sessions created", body = Vec<SessionDto>),
        (status = 400, description = "Invalid recurrence", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Coach or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recurring_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateRecurringSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let params = CreateRecurringSessionParams::from_dto(payload)?;
    let sessions = SessionService::new(&state.db)
        .create_recurring(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            sessions
                .into_iter()
                .map(SessionWithRoster::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
