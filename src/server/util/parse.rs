use chrono::NaiveTime;
use std::str::FromStr;

use crate::server::error::AppError;

/// Parses a wall-clock time in `HH:MM` 24-hour notation.
///
/// # Arguments
/// - `value` - Time string such as `"17:30"`
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed time with zero seconds
/// - `Err(AppError::BadRequest)` - Value is not a valid `HH:MM` time
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, AppError> {
    let trimmed = value.trim();
    let valid_shape = trimmed.len() == 5 && trimmed.as_bytes()[2] == b':';

    match valid_shape {
        true => NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| invalid_time(value)),
        false => Err(invalid_time(value)),
    }
}

fn invalid_time(value: &str) -> AppError {
    AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value))
}

/// Parses a client-supplied enumerated value, reporting failures as 400.
///
/// # Arguments
/// - `value` - Raw string from the request body
///
/// # Returns
/// - `Ok(T)` - Recognised value
/// - `Err(AppError::BadRequest)` - Value is not one of the allowed variants
pub fn parse_enum<T>(value: &str) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    value.parse::<T>().map_err(AppError::BadRequest)
}
