use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// JSON body extractor whose rejections render as `AppError::BadRequest`.
///
/// Behaves exactly like `axum::Json` otherwise, so every malformed body produces the
/// standard `{"error": ...}` payload with a 400 status.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor whose rejections render as `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor whose rejections render as `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
