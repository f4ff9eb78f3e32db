use crate::server::{
    data::performance::PerformanceRepository,
    model::{
        enums::FocusArea,
        performance::{FeedbackEntryParams, Rating},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_session;
mod get_history;
mod set_response;
mod upsert;

fn entry(player_id: i32, batting: i32, notes: &str) -> FeedbackEntryParams {
    FeedbackEntryParams {
        player_id,
        rating: Rating {
            batting: Some(batting),
            ..Default::default()
        },
        notes: Some(notes.to_string()),
        focus_area: None,
    }
}
