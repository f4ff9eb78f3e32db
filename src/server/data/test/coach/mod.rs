use crate::server::{
    data::coach::CoachRepository,
    model::{
        coach::{CreateCoachParams, UpdateCoachParams},
        enums::{CoachSpecialty, CoachStatus},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod next_coach_id;
mod update;

fn params(username: &str) -> CreateCoachParams {
    CreateCoachParams {
        coach_id: None,
        username: username.to_string(),
        password: "secret".to_string(),
        first_name: "Rahul".to_string(),
        last_name: "Dravid".to_string(),
        specialty: CoachSpecialty::Batting,
        experience_years: 12,
        email_address: format!("{}@academy.test", username),
        status: CoachStatus::Active,
    }
}
