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
                    .table(Performance::Table)
                    .if_not_exists()
                    .col(pk_auto(Performance::Id))
                    .col(integer(Performance::SessionId))
                    .col(integer(Performance::PlayerId))
                    .col(integer_null(Performance::Batting))
                    .col(integer_null(Performance::Bowling))
                    .col(integer_null(Performance::Wicketkeeping))
                    .col(integer_null(Performance::Fielding))
                    .col(text_null(Performance::Notes))
                    .col(string_null(Performance::FocusArea))
                    .col(text_null(Performance::PlayerResponse))
                    .col(
                        timestamp(Performance::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Performance::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_session_id")
                            .from(Performance::Table, Performance::SessionId)
                            .to(Session::Table, Session::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_player_id")
                            .from(Performance::Table, Performance::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_performance_session_player_unique")
                            .col(Performance::SessionId)
                            .col(Performance::PlayerId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Performance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Performance {
    Table,
    Id,
    SessionId,
    PlayerId,
    Batting,
    Bowling,
    Wicketkeeping,
    Fielding,
    Notes,
    FocusArea,
    PlayerResponse,
    CreatedAt,
    UpdatedAt,
}
