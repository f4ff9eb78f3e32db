use regex::Regex;
use std::sync::LazyLock;

use crate::server::error::AppError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns the trimmed value, or 400 naming `field` when it is blank.
pub fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Checks the loose `local@domain.tld` shape; the address is lower-cased.
pub fn email(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(AppError::BadRequest(format!(
            "Invalid email address '{}'",
            trimmed
        )));
    }
    Ok(trimmed.to_lowercase())
}

/// Checks `value` lies within `min..=max`.
pub fn in_range(field: &str, value: i32, min: i32, max: i32) -> Result<i32, AppError> {
    if value < min || value > max {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(value)
}
