use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coach::Table)
                    .if_not_exists()
                    .col(pk_auto(Coach::Id))
                    .col(string_uniq(Coach::CoachId))
                    .col(string_uniq(Coach::Username))
                    .col(string(Coach::PasswordHash))
                    .col(string(Coach::FirstName))
                    .col(string(Coach::LastName))
                    .col(string(Coach::Specialty))
                    .col(integer(Coach::ExperienceYears).default(0))
                    .col(string(Coach::EmailAddress))
                    .col(string(Coach::Status).default("Active"))
                    .col(
                        timestamp(Coach::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coach::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coach {
    Table,
    Id,
    CoachId,
    Username,
    PasswordHash,
    FirstName,
    LastName,
    Specialty,
    ExperienceYears,
    EmailAddress,
    Status,
    CreatedAt,
}
