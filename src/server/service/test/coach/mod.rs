use crate::server::{
    error::AppError,
    model::{
        coach::{CreateCoachParams, UpdateCoachParams},
        enums::{CoachSpecialty, CoachStatus},
    },
    service::coach::CoachService,
};
use test_utils::{builder::TestBuilder, factory};

mod add_player_note;
mod dashboard;
mod update_coach;

fn params(username: &str) -> CreateCoachParams {
    CreateCoachParams {
        coach_id: None,
        username: username.to_string(),
        password: "nets-at-six".to_string(),
        first_name: "Rahul".to_string(),
        last_name: "Kumar".to_string(),
        specialty: CoachSpecialty::Bowling,
        experience_years: 8,
        email_address: "rahul@academy.test".to_string(),
        status: CoachStatus::Active,
    }
}
