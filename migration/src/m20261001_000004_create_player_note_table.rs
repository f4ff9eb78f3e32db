use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_coach_table::Coach, m20261001_000003_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerNote::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerNote::Id))
                    .col(integer(PlayerNote::PlayerId))
                    .col(integer(PlayerNote::CoachId))
                    .col(text(PlayerNote::Content))
                    .col(
                        timestamp(PlayerNote::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_note_player_id")
                            .from(PlayerNote::Table, PlayerNote::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_note_coach_id")
                            .from(PlayerNote::Table, PlayerNote::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerNote {
    Table,
    Id,
    PlayerId,
    CoachId,
    Content,
    CreatedAt,
}
