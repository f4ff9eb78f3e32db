use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_coach_table::Coach;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(pk_auto(Session::Id))
                    .col(timestamp(Session::Date))
                    .col(string(Session::FocusArea))
                    .col(integer(Session::CoachId))
                    .col(text_null(Session::Notes))
                    .col(string(Session::Status).default("Active"))
                    .col(boolean(Session::FeedbackSubmitted).default(false))
                    .col(boolean(Session::IsRecurring).default(false))
                    .col(string_null(Session::DayOfWeek))
                    .col(string_null(Session::Time))
                    .col(integer_null(Session::DurationMinutes))
                    .col(string_null(Session::RecurrenceGroupId))
                    .col(
                        timestamp(Session::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_coach_id")
                            .from(Session::Table, Session::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_coach_id")
                    .table(Session::Table)
                    .col(Session::CoachId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_session_coach_id")
                    .table(Session::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    Id,
    Date,
    FocusArea,
    CoachId,
    Notes,
    Status,
    FeedbackSubmitted,
    IsRecurring,
    DayOfWeek,
    Time,
    DurationMinutes,
    RecurrenceGroupId,
    CreatedAt,
}
