use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto},
    },
    server::{
        error::AppError,
        model::{auth::LoginParams, enums::Role},
        service::auth::AuthService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as an admin.
///
/// Verifies the credentials against the admin table and issues a bearer token whose
/// role claim is `admin`.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token, role and id
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    login(&state, Role::Admin, payload).await
}

/// Log in as a coach.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/coach/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn coach_login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    login(&state, Role::Coach, payload).await
}

/// Log in as a player.
///
/// Players created without credentials cannot log in and are reported exactly like
/// an unknown username.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/player/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn player_login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    login(&state, Role::Player, payload).await
}

async fn login(state: &AppState, role: Role, payload: LoginDto) -> Result<impl IntoResponse, AppError> {
    let result = AuthService::new(&state.db, &state.tokens)
        .login(role, LoginParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
