use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        feedback::{PerformanceDto, PlayerResponseDto, SessionFeedbackDto, SubmitFeedbackDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            enums::Role,
            performance::{feedback_entries_from_dto, SessionFeedback},
        },
        service::feedback::FeedbackService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// Submit feedback for a session.
///
/// Every entry is written in one transaction together with the session's
/// `feedbackSubmitted` flag. Afterwards each rated player receives a notification and a
/// `new-feedback` push.
///
/// # Access Control
/// - `Coach` owning the session
///
/// # Arguments
/// - `id` - Session id
/// - `payload` - Non-empty list of `{playerId, rating, notes?, focusArea?}`
///
/// # Returns
/// - `200 OK` - The session with all its entries
/// - `400 Bad Request` - Empty list, missing field, or player not on the roster
/// - `403 Forbidden` - Session belongs to another coach
/// - `404 Not Found` - No session with that id
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/feedback",
    tag = FEEDBACK_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Session id")),
    request_body = SubmitFeedbackDto,
    responses(
        (status = 200, description = "Feedback submitted", body = SessionFeedbackDto),
        (status = 400, description = "Invalid feedback", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the session's coach", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<SubmitFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let coach = AuthGuard::new(&state.db, &state.tokens)
        .require_coach(&headers)
        .await?;

    let entries = feedback_entries_from_dto(payload)?;
    let feedback = FeedbackService::new(&state.db, &state.push)
        .submit(&coach, id, entries)
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Edit a session's feedback.
///
/// Same validation as submission; existing entries are replaced per player and no
/// notifications are sent.
///
/// # Access Control
/// - `Coach` owning the session
#[utoipa::path(
    put,
    path = "/api/sessions/{id}/feedback",
    tag = FEEDBACK_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Session id")),
    request_body = SubmitFeedbackDto,
    responses(
        (status = 200, description = "Feedback updated", body = SessionFeedbackDto),
        (status = 400, description = "Invalid feedback", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the session's coach", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<SubmitFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let coach = AuthGuard::new(&state.db, &state.tokens)
        .require_coach(&headers)
        .await?;

    let entries = feedback_entries_from_dto(payload)?;
    let feedback = FeedbackService::new(&state.db, &state.push)
        .edit(&coach, id, entries)
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Respond to the feedback the caller received for a session.
///
/// A player may respond once per entry. The session's coach is notified.
///
/// # Access Control
/// - `Player` with an entry in the session
///
/// # Returns
/// - `200 OK` - The entry with the stored response
/// - `400 Bad Request` - Empty response or already responded
/// - `404 Not Found` - No session or no entry for the caller
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/feedback/response",
    tag = FEEDBACK_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Session id")),
    request_body = PlayerResponseDto,
    responses(
        (status = 200, description = "Response stored", body = PerformanceDto),
        (status = 400, description = "Invalid response", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a player", body = ErrorDto),
        (status = 404, description = "No feedback for this player", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_to_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<PlayerResponseDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &state.tokens)
        .require_player(&headers)
        .await?;

    let entry = FeedbackService::new(&state.db, &state.push)
        .respond(&player, id, &payload.response)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Feedback visible to the caller.
///
/// Coaches get every session they own; players get only sessions with an entry for
/// them, reduced to that entry.
///
/// # Access Control
/// - `Coach`, `Player`
#[utoipa::path(
    get,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Visible feedback", body = Vec<SessionFeedbackDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coach or player", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Coach, Role::Player])
        .await?;

    let feedback = FeedbackService::new(&state.db, &state.push)
        .feedback_for(&identity)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            feedback
                .into_iter()
                .map(SessionFeedback::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
