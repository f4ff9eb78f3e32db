use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        coach::{CoachDashboardDto, CreatePlayerNoteDto, PlayerNoteDto},
        feedback::{PerformanceDto, PerformanceNoteDto, SessionFeedbackDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::performance::FeedbackEntryParams,
        service::{coach::CoachService, feedback::FeedbackService},
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping coach endpoints in OpenAPI documentation
pub static COACH_TAG: &str = "coach";

/// Get the calling coach's dashboard.
///
/// Returns the coach profile, the number of sessions they own, the number of distinct
/// players across those sessions, and every owned session with its roster.
///
/// # Access Control
/// - `Coach`
#[utoipa::path(
    get,
    path = "/api/coach/dashboard",
    tag = COACH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Coach dashboard", body = CoachDashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coach", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let coach = AuthGuard::new(&state.db, &state.tokens)
        .require_coach(&headers)
        .await?;

    let dashboard = CoachService::new(&state.db).dashboard(coach).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Append a note about a player, authored by the caller.
///
/// # Access Control
/// - `Coach`
///
/// # Returns
/// - `201 Created` - The stored note
/// - `400 Bad Request` - Empty content
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    post,
    path = "/api/coach/players/{player_id}/notes",
    tag = COACH_TAG,
    security(("bearer" = [])),
    params(("player_id" = i32, Path, description = "Player row id")),
    request_body = CreatePlayerNoteDto,
    responses(
        (status = 201, description = "Note added", body = PlayerNoteDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coach", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_player_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(player_id): AppPath<i32>,
    AppJson(payload): AppJson<CreatePlayerNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let coach = AuthGuard::new(&state.db, &state.tokens)
        .require_coach(&headers)
        .await?;

    let note = CoachService::new(&state.db)
        .add_player_note(&coach, player_id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}

/// Get the performance entries of one of the caller's sessions.
///
/// # Access Control
/// - `Coach` owning the session
#[utoipa::path(
    get,
    path = "/api/coach/sessions/{session_id}/performance",
    tag = COACH_TAG,
    security(("bearer" = [])),
    params(("session_id" = i32, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session with entries", body = SessionFeedbackDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the session's coach", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_performance(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(session_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let coach = AuthGuard::new(&state.db, &state.tokens)
        .require_coach(&headers)
        .await?;

    let feedback = FeedbackService::new(&state.db, &state.push)
        .session_performance(&coach, session_id)
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Record or replace one player's performance note for a session.
///
/// No notification is sent.
///
/// # Access Control
/// - `Coach` owning the session
///
/// # Returns
/// - `200 OK` - The stored entry
/// - `400 Bad Request` - Missing rating or player not on the roster
/// - `403 Forbidden` - Session belongs to another coach
/// - `404 Not Found` - No session with that id
#[utoipa::path(
    post,
    path = "/api/coach/sessions/{session_id}/performance/{player_id}",
    tag = COACH_TAG,
    security(("bearer" = [])),
    params(
        ("session_id" = i32, Path, description = "Session id"),
        ("player_id" = i32, Path, description = "Player row id")
    ),
    request_body = PerformanceNoteDto,
    responses(
        (status = 200, description = "Entry stored", body = PerformanceDto),
        (status = 400, description = "Invalid entry", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the session's coach", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_performance_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath((session_id, player_id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<PerformanceNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let coach = AuthGuard::new(&state.db, &state.tokens)
        .require_coach(&headers)
        .await?;

    let entry = FeedbackEntryParams::from_note(player_id, payload)?;
    let stored = FeedbackService::new(&state.db, &state.push)
        .add_note(&coach, session_id, entry)
        .await?;

    Ok((StatusCode::OK, Json(stored.into_dto())))
}
