use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `Authorization` header is absent or is not a bearer credential.
    #[error("Missing or malformed token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation, or carries an unknown role.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Login attempted with an unknown username or a wrong password.
    ///
    /// Both cases share one message so usernames cannot be probed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The token was valid but its subject no longer exists in the role's table.
    #[error("User not found")]
    IdentityNotFound,

    /// The caller's role is not in the route's allowed set.
    #[error("Access denied")]
    AccessDenied,
}

/// Converts authentication errors into HTTP responses.
///
/// - `AccessDenied` → 403 Forbidden
/// - every other variant → 401 Unauthorized
///
/// All rejections are logged at debug level; the client receives only the variant's message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let status = match self {
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::MissingToken
            | Self::InvalidToken
            | Self::InvalidCredentials
            | Self::IdentityNotFound => StatusCode::UNAUTHORIZED,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
