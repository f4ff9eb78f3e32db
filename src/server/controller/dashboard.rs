use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{AdminStatsDto, DashboardDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::enums::Role,
        service::dashboard::DashboardService, state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Academy-wide totals.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Academy totals", body = AdminStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require_admin(&headers)
        .await?;

    let stats = DashboardService::new(&state.db).admin_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Landing-page summary for the caller's role, tagged by `role`.
///
/// # Access Control
/// - Any authenticated role
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Role summary", body = DashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Admin, Role::Coach, Role::Player])
        .await?;

    let dashboard = DashboardService::new(&state.db).dashboard(&identity).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
