use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub player_id: String,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub role: String,
    pub academy_level: String,
    pub email_address: String,
    pub cricclubs_id: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::performance::Entity")]
    Performance,
    #[sea_orm(has_many = "super::player_note::Entity")]
    PlayerNote,
    #[sea_orm(has_many = "super::evaluation::Entity")]
    Evaluation,
    #[sea_orm(has_many = "super::session_player::Entity")]
    SessionPlayer,
}

impl Related<super::performance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performance.def()
    }
}

impl Related<super::player_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerNote.def()
    }
}

impl Related<super::evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::session_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
