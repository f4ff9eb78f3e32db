use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the bootstrap admin when the admin table is empty.
///
/// Does nothing when `ADMIN_USERNAME` / `ADMIN_PASSWORD` are unset or an admin already
/// exists.
///
/// # Returns
/// - `Ok(())` - Admin present or nothing to do
/// - `Err(AppError::BadRequest)` - Configured credentials are blank
/// - `Err(AppError)` - Database or hashing failure
pub async fn ensure_bootstrap_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    use crate::{
        model::admin::CreateAdminDto,
        server::{model::admin::CreateAdminParams, service::admin::AdminService},
    };

    let Some((username, password)) = config.bootstrap_admin.clone() else {
        return Ok(());
    };

    let params = CreateAdminParams::from_dto(CreateAdminDto { username, password })?;
    if let Some(admin) = AdminService::new(db).ensure_bootstrap_admin(params).await? {
        tracing::info!("Created bootstrap admin '{}'", admin.username);
    }

    Ok(())
}

/// Builds the HTTP client for outbound requests.
///
/// Redirects are disabled so requests stay on the configured host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialise
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// CORS layer for the configured origins, permissive when none are configured.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to apply to the router
/// - `Err(ConfigError::InvalidEnvVar)` - An origin is not a valid header value
pub fn setup_cors(config: &Config) -> Result<tower_http::cors::CorsLayer, AppError> {
    use axum::http::HeaderValue;
    use tower_http::cors::{AllowOrigin, Any, CorsLayer};

    let Some(origins) = &config.cors_origins else {
        return Ok(CorsLayer::permissive());
    };

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGINS".to_string(),
                    value: origin.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Resolves when Ctrl-C or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Error listening for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Error listening for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
