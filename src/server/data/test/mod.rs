mod coach;
mod evaluation;
mod notification;
mod performance;
mod player_note;
mod session;
