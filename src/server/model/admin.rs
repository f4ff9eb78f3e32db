//! Admin accounts.

use chrono::{DateTime, Utc};

use crate::{
    model::admin::{AdminDto, CreateAdminDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Converts to the wire shape; the password hash is dropped.
    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    pub username: String,
    pub password: String,
}

impl CreateAdminParams {
    /// Validates the request body.
    ///
    /// # Returns
    /// - `Ok(CreateAdminParams)` - Trimmed username and non-empty password
    /// - `Err(AppError::BadRequest)` - A field is blank
    pub fn from_dto(dto: CreateAdminDto) -> Result<Self, AppError> {
        Ok(Self {
            username: validate::required("username", &dto.username)?,
            password: required_password(&dto.password)?,
        })
    }
}

/// Passwords are never trimmed, only checked for emptiness.
pub fn required_password(password: &str) -> Result<String, AppError> {
    if password.is_empty() {
        return Err(AppError::BadRequest("password is required".to_string()));
    }
    Ok(password.to_string())
}
