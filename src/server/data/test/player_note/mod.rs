use crate::server::data::player_note::PlayerNoteRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_player;
