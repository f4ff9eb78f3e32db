use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        evaluation::{CreateEvaluationDto, EvaluationDto, RespondEvaluationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            enums::Role,
            evaluation::{CreateEvaluationParams, Evaluation},
        },
        service::evaluation::EvaluationService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping evaluation endpoints in OpenAPI documentation
pub static EVALUATION_TAG: &str = "evaluation";

/// Create a structured evaluation of a player.
///
/// Coaches always evaluate as themselves. Admins must name the evaluating coach. The
/// player is notified and receives a `new-evaluation` push.
///
/// # Access Control
/// - `Coach`, `Admin`
///
/// # Returns
/// - `201 Created` - The stored evaluation
/// - `400 Bad Request` - Score outside 1-10 or admin without `coachId`
/// - `404 Not Found` - Coach or player does not exist
#[utoipa::path(
    post,
    path = "/api/evaluations",
    tag = EVALUATION_TAG,
    security(("bearer" = [])),
    request_body = CreateEvaluationDto,
    responses(
        (status = 201, description = "Evaluation created", body = EvaluationDto),
        (status = 400, description = "Invalid evaluation", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a coach or admin", body = ErrorDto),
        (status = 404, description = "Coach or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_evaluation(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateEvaluationDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Coach, Role::Admin])
        .await?;

    let params = CreateEvaluationParams::from_dto(payload)?;
    let evaluation = EvaluationService::new(&state.db, &state.push)
        .create(&identity, params)
        .await?;

    Ok((StatusCode::CREATED, Json(evaluation.into_dto())))
}

/// Respond to an evaluation addressed to the caller.
///
/// # Access Control
/// - `Player` the evaluation belongs to
///
/// # Returns
/// - `200 OK` - The evaluation with the stored response
/// - `400 Bad Request` - Empty response or already responded
/// - `404 Not Found` - Missing or addressed to another player
#[utoipa::path(
    post,
    path = "/api/evaluations/{id}/respond",
    tag = EVALUATION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Evaluation id")),
    request_body = RespondEvaluationDto,
    responses(
        (status = 200, description = "Response stored", body = EvaluationDto),
        (status = 400, description = "Invalid response", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a player", body = ErrorDto),
        (status = 404, description = "Evaluation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_to_evaluation(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<RespondEvaluationDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &state.tokens)
        .require_player(&headers)
        .await?;

    let evaluation = EvaluationService::new(&state.db, &state.push)
        .respond(&player, id, &payload.player_response)
        .await?;

    Ok((StatusCode::OK, Json(evaluation.into_dto())))
}

/// List a player's evaluations, newest first.
///
/// # Access Control
/// - `Admin`, `Coach`
/// - `Player`, for their own evaluations only
#[utoipa::path(
    get,
    path = "/api/evaluations/player/{player_id}",
    tag = EVALUATION_TAG,
    security(("bearer" = [])),
    params(("player_id" = i32, Path, description = "Player row id")),
    responses(
        (status = 200, description = "Evaluations", body = Vec<EvaluationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Another player's evaluations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_evaluations(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(player_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Admin, Role::Coach, Role::Player])
        .await?;

    let evaluations = EvaluationService::new(&state.db, &state.push)
        .list_by_player(&identity, player_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(evaluations))))
}

/// List every evaluation, newest first.
///
/// # Access Control
/// - `Admin`, `Coach`
#[utoipa::path(
    get,
    path = "/api/evaluations",
    tag = EVALUATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Evaluations", body = Vec<EvaluationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or coach", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_evaluations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Admin, Role::Coach])
        .await?;

    let evaluations = EvaluationService::new(&state.db, &state.push)
        .list_all()
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(evaluations))))
}

fn into_dtos(evaluations: Vec<Evaluation>) -> Vec<EvaluationDto> {
    evaluations.into_iter().map(Evaluation::into_dto).collect()
}
