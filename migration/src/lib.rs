pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_admin_table;
mod m20261001_000002_create_coach_table;
mod m20261001_000003_create_player_table;
mod m20261001_000004_create_player_note_table;
mod m20261002_000005_create_session_table;
mod m20261002_000006_create_session_player_table;
mod m20261002_000007_create_performance_table;
mod m20261003_000008_create_evaluation_table;
mod m20261003_000009_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_admin_table::Migration),
            Box::new(m20261001_000002_create_coach_table::Migration),
            Box::new(m20261001_000003_create_player_table::Migration),
            Box::new(m20261001_000004_create_player_note_table::Migration),
            Box::new(m20261002_000005_create_session_table::Migration),
            Box::new(m20261002_000006_create_session_player_table::Migration),
            Box::new(m20261002_000007_create_performance_table::Migration),
            Box::new(m20261003_000008_create_evaluation_table::Migration),
            Box::new(m20261003_000009_create_notification_table::Migration),
        ]
    }
}
