use sea_orm::entity::prelude::*;
use serde::Serialize;

/// SeaORM entity for the login_logs table
///
/// One row per successful login. Rows are written once by the recorder and
/// never updated; queries order by login_time descending.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "login_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    /// RFC 3339 UTC timestamp; lexicographic order matches chronological order
    pub login_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
