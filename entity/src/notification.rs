use sea_orm::entity::prelude::*;

/// Recipients live in different identity tables, so `recipient_id` is only
/// meaningful together with `recipient_role` and carries no foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recipient_id: i32,
    pub recipient_role: String,
    pub sender_id: Option<i32>,
    pub kind: String,
    pub session_id: Option<i32>,
    pub player_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
