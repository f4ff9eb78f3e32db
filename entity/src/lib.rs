pub mod prelude;

pub mod admin;
pub mod coach;
pub mod evaluation;
pub mod notification;
pub mod performance;
pub mod player;
pub mod player_note;
pub mod session;
pub mod session_player;
