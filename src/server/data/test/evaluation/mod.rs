use crate::server::data::evaluation::{EvaluationRepository, NotifiedParty};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_player;
mod mark_notified;
mod set_response;
