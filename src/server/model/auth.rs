//! Authenticated identities and login.

use crate::{
    model::auth::{LoginDto, LoginResponseDto},
    server::model::{admin::Admin, coach::Coach, enums::Role, player::Player},
};

/// The caller resolved by the auth guard, re-read from its role's table.
#[derive(Debug, Clone)]
pub enum Identity {
    Admin(Admin),
    Coach(Coach),
    Player(Player),
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Identity::Admin(_) => Role::Admin,
            Identity::Coach(_) => Role::Coach,
            Identity::Player(_) => Role::Player,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Identity::Admin(admin) => admin.id,
            Identity::Coach(coach) => coach.id,
            Identity::Player(player) => player.id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub role: Role,
    pub id: i32,
}

impl LoginResult {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            token: self.token,
            role: self.role.as_str().to_string(),
            id: self.id,
        }
    }
}
