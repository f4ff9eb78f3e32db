pub use super::admin::Entity as Admin;
pub use super::coach::Entity as Coach;
pub use super::evaluation::Entity as Evaluation;
pub use super::notification::Entity as Notification;
pub use super::performance::Entity as Performance;
pub use super::player::Entity as Player;
pub use super::player_note::Entity as PlayerNote;
pub use super::session::Entity as Session;
pub use super::session_player::Entity as SessionPlayer;
