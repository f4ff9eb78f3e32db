use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;
const DEFAULT_CRICCLUBS_BASE_URL: &str = "https://cricclubs.com/PremierCricAcad";

/// Application configuration loaded from the process environment.
///
/// `main` calls `dotenvy::dotenv()` first, so a local `.env` file is honoured.
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_address: String,
    pub token_ttl_seconds: i64,

    /// Allowed CORS origins; `None` means permissive.
    pub cors_origins: Option<Vec<String>>,
    pub cricclubs_base_url: String,

    /// Credentials for the admin account created when the admin table is empty.
    pub bootstrap_admin: Option<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset. A missing `JWT_SECRET` is fatal.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of an environment variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let token_ttl_seconds = match get("TOKEN_TTL_SECONDS") {
            Some(value) => match value.parse::<i64>() {
                Ok(ttl) if ttl > 0 => ttl,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "TOKEN_TTL_SECONDS".to_string(),
                        value,
                    }
                    .into())
                }
            },
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };

        let cors_origins = get("CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        let bootstrap_admin = match (get("ADMIN_USERNAME"), get("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            token_ttl_seconds,
            cors_origins,
            cricclubs_base_url: get("CRICCLUBS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_CRICCLUBS_BASE_URL.to_string()),
            bootstrap_admin,
        })
    }
}
