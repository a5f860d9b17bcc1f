use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::login_log::Entity")]
    LoginLog,
}

impl Related<super::login_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoginLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
