use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{PlayerDto, PlayerProfileDto, PlayerSessionDto, UpdatePlayerStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            enums::{PlayerStatus, Role},
            player::PlayerSession,
        },
        service::player::PlayerService,
        state::AppState,
        util::{
            extract::{AppJson, AppPath},
            parse::parse_enum,
        },
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Look up a player by external player id (e.g. `PLR1001`).
///
/// # Access Control
/// - `Admin`, `Coach`
#[utoipa::path(
    get,
    path = "/api/players/by-id/{player_id}",
    tag = PLAYER_TAG,
    security(("bearer" = [])),
    params(("player_id" = String, Path, description = "External player id")),
    responses(
        (status = 200, description = "Player", body = PlayerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or coach", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_by_player_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(player_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Admin, Role::Coach])
        .await?;

    let player = PlayerService::new(&state.db)
        .get_by_player_id(&player_id)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Change a player's status.
///
/// # Access Control
/// - `Admin`, `Coach`
///
/// # Returns
/// - `200 OK` - The updated player
/// - `400 Bad Request` - Unknown status value
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    patch,
    path = "/api/players/{id}/status",
    tag = PLAYER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Player row id")),
    request_body = UpdatePlayerStatusDto,
    responses(
        (status = 200, description = "Status updated", body = PlayerDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or coach", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePlayerStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Admin, Role::Coach])
        .await?;

    let status: PlayerStatus = parse_enum(payload.status.trim())?;
    let player = PlayerService::new(&state.db)
        .update_status(id, status)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Get the calling player's profile with performance history and coach notes.
///
/// # Access Control
/// - `Player`
#[utoipa::path(
    get,
    path = "/api/player/profile",
    tag = PLAYER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Own profile", body = PlayerProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a player", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &state.tokens)
        .require_player(&headers)
        .await?;

    let profile = PlayerService::new(&state.db).profile(player).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// List sessions the calling player is rostered on.
///
/// Each session carries the coach's name and only the caller's own performance entry.
///
/// # Access Control
/// - `Player`
#[utoipa::path(
    get,
    path = "/api/player/sessions",
    tag = PLAYER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Own sessions", body = Vec<PlayerSessionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a player", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &state.tokens)
        .require_player(&headers)
        .await?;

    let sessions = PlayerService::new(&state.db).sessions(&player).await?;

    Ok((
        StatusCode::OK,
        Json(
            sessions
                .into_iter()
                .map(PlayerSession::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
