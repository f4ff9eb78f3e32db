mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, push::PushHub, router, startup, state::AppState,
    util::token::TokenKeys,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_bootstrap_admin(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let cors = startup::setup_cors(&config)?;

    let state = AppState::new(
        db,
        TokenKeys::new(&config.jwt_secret, config.token_ttl_seconds),
        PushHub::new(),
        http_client,
        config.cricclubs_base_url.clone(),
    );

    let app = router::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
