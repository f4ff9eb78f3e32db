use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, stats::PlayerStatsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::enums::Role,
        service::stats::StatsService, state::AppState, util::extract::AppPath,
    },
};

/// Tag for grouping stats endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Career stats from the external club site.
///
/// Lookup failures are not errors: the response is the `"Unavailable"` placeholder
/// with zero counters.
///
/// # Access Control
/// - Any authenticated role
#[utoipa::path(
    get,
    path = "/api/cricclubs/{cricclubs_id}",
    tag = STATS_TAG,
    security(("bearer" = [])),
    params(("cricclubs_id" = String, Path, description = "Player id on the club site")),
    responses(
        (status = 200, description = "Player stats or placeholder", body = PlayerStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(cricclubs_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[Role::Admin, Role::Coach, Role::Player])
        .await?;

    let stats = StatsService::new(&state.http_client, &state.cricclubs_base_url)
        .lookup(&cricclubs_id)
        .await;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
