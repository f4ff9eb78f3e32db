use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000003_create_player_table::Player, m20261002_000005_create_session_table::Session,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionPlayer::Table)
                    .if_not_exists()
                    .col(integer(SessionPlayer::SessionId))
                    .col(integer(SessionPlayer::PlayerId))
                    .primary_key(
                        Index::create()
                            .col(SessionPlayer::SessionId)
                            .col(SessionPlayer::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_player_session_id")
                            .from(SessionPlayer::Table, SessionPlayer::SessionId)
                            .to(Session::Table, Session::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_player_player_id")
                            .from(SessionPlayer::Table, SessionPlayer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SessionPlayer {
    Table,
    SessionId,
    PlayerId,
}
