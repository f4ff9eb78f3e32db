use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        controller::{
            admin,
            auth,
            coach,
            dashboard,
            evaluation,
            feedback,
            notification,
            player,
            session,
            stats,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cricket Academy API",
        description = "Players, coaches, sessions, feedback and evaluations"
    ),
    paths(
        auth::admin_login,
        auth::coach_login,
        auth::player_login,
        admin::get_admin,
        admin::create_admin,
        admin::get_coaches,
        admin::create_coach,
        admin::update_coach,
        admin::get_coach_by_coach_id,
        admin::get_players,
        admin::create_player,
        admin::update_player,
        player::get_player_by_player_id,
        player::update_player_status,
        player::get_own_profile,
        player::get_own_sessions,
        coach::get_dashboard,
        coach::add_player_note,
        coach::get_session_performance,
        coach::add_performance_note,
        session::get_sessions,
        session::create_session,
        session::create_recurring_sessions,
        feedback::submit_feedback,
        feedback::edit_feedback,
        feedback::respond_to_feedback,
        feedback::get_feedback,
        evaluation::create_evaluation,
        evaluation::respond_to_evaluation,
        evaluation::get_player_evaluations,
        evaluation::get_evaluations,
        notification::get_notifications,
        notification::mark_notification_read,
        notification::delete_notification,
        notification::notification_stream,
        dashboard::get_admin_stats,
        dashboard::get_dashboard,
        stats::get_player_stats,
    ),
    components(schemas(ErrorDto, MessageDto)),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Login for each role"),
        (name = "admin", description = "Account management"),
        (name = "player", description = "Player lookup and self-service"),
        (name = "coach", description = "Coach dashboard, notes and performance entries"),
        (name = "session", description = "Training session scheduling"),
        (name = "feedback", description = "Session feedback and player responses"),
        (name = "evaluation", description = "Structured player evaluations"),
        (name = "notification", description = "Notifications and the real-time stream"),
        (name = "dashboard", description = "Role summaries"),
        (name = "stats", description = "External player statistics")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by every protected path.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        // auth
        .route("/api/admin/login", post(auth::admin_login))
        .route("/api/coach/login", post(auth::coach_login))
        .route("/api/player/login", post(auth::player_login))
        // admin
        .route("/api/admin", get(admin::get_admin).post(admin::create_admin))
        .route(
            "/api/admin/coaches",
            get(admin::get_coaches).post(admin::create_coach),
        )
        .route("/api/admin/coaches/{id}", put(admin::update_coach))
        .route(
            "/api/admin/players",
            get(admin::get_players).post(admin::create_player),
        )
        .route("/api/admin/players/{id}", put(admin::update_player))
        .route(
            "/api/coaches/by-id/{coach_id}",
            get(admin::get_coach_by_coach_id),
        )
        .route("/api/admin/dashboard", get(dashboard::get_admin_stats))
        // players
        .route(
            "/api/players/by-id/{player_id}",
            get(player::get_player_by_player_id),
        )
        .route(
            "/api/players/{id}/status",
            patch(player::update_player_status),
        )
        .route("/api/player/profile", get(player::get_own_profile))
        .route("/api/player/sessions", get(player::get_own_sessions))
        // coaches
        .route("/api/coach/dashboard", get(coach::get_dashboard))
        .route(
            "/api/coach/players/{player_id}/notes",
            post(coach::add_player_note),
        )
        .route(
            "/api/coach/sessions/{session_id}/performance",
            get(coach::get_session_performance),
        )
        .route(
            "/api/coach/sessions/{session_id}/performance/{player_id}",
            post(coach::add_performance_note),
        )
        // sessions and feedback
        .route(
            "/api/sessions",
            get(session::get_sessions).post(session::create_session),
        )
        .route(
            "/api/sessions/recurring",
            post(session::create_recurring_sessions),
        )
        .route(
            "/api/sessions/{id}/feedback",
            post(feedback::submit_feedback).put(feedback::edit_feedback),
        )
        .route(
            "/api/sessions/{id}/feedback/response",
            post(feedback::respond_to_feedback),
        )
        .route("/api/feedback", get(feedback::get_feedback))
        // evaluations
        .route(
            "/api/evaluations",
            get(evaluation::get_evaluations).post(evaluation::create_evaluation),
        )
        .route(
            "/api/evaluations/{id}/respond",
            post(evaluation::respond_to_evaluation),
        )
        .route(
            "/api/evaluations/player/{player_id}",
            get(evaluation::get_player_evaluations),
        )
        // notifications
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/stream",
            get(notification::notification_stream),
        )
        .route(
            "/api/notifications/{id}/read",
            patch(notification::mark_notification_read),
        )
        .route(
            "/api/notifications/{id}",
            delete(notification::delete_notification),
        )
        // dashboards and stats
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/cricclubs/{cricclubs_id}", get(stats::get_player_stats))
}
