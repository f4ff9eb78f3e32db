use crate::server::{
    error::AppError,
    model::{
        enums::{AcademyLevel, PlayerRole, PlayerStatus},
        player::{CreatePlayerParams, PlayerCredentials},
    },
    service::player::PlayerService,
    util::password::verify_password,
};
use test_utils::{builder::TestBuilder, factory};

mod create_player;
mod update_status;

fn params(credentials: Option<(&str, &str)>) -> CreatePlayerParams {
    CreatePlayerParams {
        player_id: None,
        credentials: credentials.map(|(username, password)| PlayerCredentials {
            username: username.to_string(),
            password: password.to_string(),
        }),
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        age: 15,
        role: PlayerRole::AllRounder,
        academy_level: AcademyLevel::Intermediate,
        email_address: "asha@academy.test".to_string(),
        cricclubs_id: "90210".to_string(),
        status: PlayerStatus::Active,
    }
}
