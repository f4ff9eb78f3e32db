use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{AdminDto, CreateAdminDto},
        api::ErrorDto,
        coach::{CoachDto, CreateCoachDto, UpdateCoachDto},
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            admin::CreateAdminParams,
            coach::{Coach, CreateCoachParams, UpdateCoachParams},
            player::{CreatePlayerParams, Player, UpdatePlayerParams},
        },
        service::{admin::AdminService, coach::CoachService, player::PlayerService},
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get the calling admin's profile.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Admin profile without the password hash
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/admin",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Admin profile", body = AdminDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

/// Create another admin account.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `payload` - Username and password; the password is hashed before storage
///
/// # Returns
/// - `201 Created` - The new admin
/// - `400 Bad Request` - Blank field or username already taken
/// - `401 Unauthorized` / `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/admin",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created", body = AdminDto),
        (status = 400, description = "Invalid admin data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let params = CreateAdminParams::from_dto(payload)?;
    let admin = AdminService::new(&state.db).create_admin(params).await?;

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}

/// List every coach.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/coaches",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All coaches", body = Vec<CoachDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coaches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let coaches = CoachService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(coaches.into_iter().map(Coach::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a coach account.
///
/// A `CCH####` id is generated when `coachId` is omitted.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new coach
/// - `400 Bad Request` - Validation failure or duplicate username / coach id
#[utoipa::path(
    post,
    path = "/api/admin/coaches",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = CreateCoachDto,
    responses(
        (status = 201, description = "Coach created", body = CoachDto),
        (status = 400, description = "Invalid coach data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coach(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateCoachDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let params = CreateCoachParams::from_dto(payload)?;
    let coach = CoachService::new(&state.db).create_coach(params).await?;

    Ok((StatusCode::CREATED, Json(coach.into_dto())))
}

/// Partially update a coach.
///
/// Only the fields present in the body are changed. A new password is hashed.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated coach
/// - `400 Bad Request` - Validation failure or duplicate username / coach id
/// - `404 Not Found` - No coach with that id
#[utoipa::path(
    put,
    path = "/api/admin/coaches/{id}",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Coach row id")),
    request_body = UpdateCoachDto,
    responses(
        (status = 200, description = "Coach updated", body = CoachDto),
        (status = 400, description = "Invalid coach data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_coach(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateCoachDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let params = UpdateCoachParams::from_dto(payload)?;
    let coach = CoachService::new(&state.db).update_coach(id, params).await?;

    Ok((StatusCode::OK, Json(coach.into_dto())))
}

/// Look up a coach by external coach id (e.g. `CCH1001`).
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/coaches/by-id/{coach_id}",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(("coach_id" = String, Path, description = "External coach id")),
    responses(
        (status = 200, description = "Coach", body = CoachDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coach_by_coach_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(coach_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let coach = CoachService::new(&state.db)
        .get_by_coach_id(&coach_id)
        .await?;

    Ok((StatusCode::OK, Json(coach.into_dto())))
}

/// List every player.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/players",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All players", body = Vec<PlayerDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let players = PlayerService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(players.into_iter().map(Player::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a player.
///
/// Credentials are optional; a player without them exists only as a roster entry.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new player
/// - `400 Bad Request` - Validation failure or duplicate username / player id
#[utoipa::path(
    post,
    path = "/api/admin/players",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let params = CreatePlayerParams::from_dto(payload)?;
    let player = PlayerService::new(&state.db).create_player(params).await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// Partially update a player.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated player
/// - `400 Bad Request` - Validation failure or duplicate username / player id
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    put,
    path = "/api/admin/players/{id}",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Player row id")),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let params = UpdatePlayerParams::from_dto(payload)?;
    let player = PlayerService::new(&state.db)
        .update_player(id, params)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}
