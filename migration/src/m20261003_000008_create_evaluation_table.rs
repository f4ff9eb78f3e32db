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
                    .table(Evaluation::Table)
                    .if_not_exists()
                    .col(pk_auto(Evaluation::Id))
                    .col(integer(Evaluation::PlayerId))
                    .col(integer(Evaluation::CoachId))
                    .col(
                        timestamp(Evaluation::DateOfEvaluation)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(json(Evaluation::Feedback))
                    .col(json(Evaluation::Categories))
                    .col(text_null(Evaluation::CoachComments))
                    .col(text_null(Evaluation::PlayerResponse))
                    .col(boolean(Evaluation::PlayerResponded).default(false))
                    .col(boolean(Evaluation::CoachNotified).default(false))
                    .col(boolean(Evaluation::PlayerNotified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evaluation_player_id")
                            .from(Evaluation::Table, Evaluation::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evaluation_coach_id")
                            .from(Evaluation::Table, Evaluation::CoachId)
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
            .drop_table(Table::drop().table(Evaluation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Evaluation {
    Table,
    Id,
    PlayerId,
    CoachId,
    DateOfEvaluation,
    Feedback,
    Categories,
    CoachComments,
    PlayerResponse,
    PlayerResponded,
    CoachNotified,
    PlayerNotified,
}
