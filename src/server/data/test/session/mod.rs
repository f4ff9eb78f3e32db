use crate::server::{
    data::session::SessionRepository,
    model::{
        enums::{DayOfWeek, FocusArea},
        session::{NewSession, Recurrence},
    },
};
use chrono::{Duration, NaiveTime, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_players_for_coach;
mod create;
mod get_for_player;
mod with_rosters;
