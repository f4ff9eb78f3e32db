use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: DateTimeUtc,
    pub focus_area: String,
    pub coach_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub status: String,
    pub feedback_submitted: bool,
    pub is_recurring: bool,
    pub day_of_week: Option<String>,
    pub time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub recurrence_group_id: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::coach::Entity",
        from = "Column::CoachId",
        to = "super::coach::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Coach,
    #[sea_orm(has_many = "super::performance::Entity")]
    Performance,
    #[sea_orm(has_many = "super::session_player::Entity")]
    SessionPlayer,
}

impl Related<super::coach::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coach.def()
    }
}

impl Related<super::performance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performance.def()
    }
}

impl Related<super::session_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
