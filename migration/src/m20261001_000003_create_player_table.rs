use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_uniq(Player::PlayerId))
                    // Players may exist without credentials
                    .col(string_null(Player::Username).unique_key())
                    .col(string_null(Player::PasswordHash))
                    .col(string(Player::FirstName))
                    .col(string(Player::LastName))
                    .col(integer(Player::Age))
                    .col(string(Player::Role))
                    .col(string(Player::AcademyLevel))
                    .col(string(Player::EmailAddress))
                    .col(string(Player::CricclubsId))
                    .col(string(Player::Status).default("Active"))
                    .col(
                        timestamp(Player::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    PlayerId,
    Username,
    PasswordHash,
    FirstName,
    LastName,
    Age,
    Role,
    AcademyLevel,
    EmailAddress,
    CricclubsId,
    Status,
    CreatedAt,
}
