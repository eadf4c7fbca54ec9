use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "studio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_studio::Entity")]
    MovieStudio,
}

impl Related<super::movie_studio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieStudio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
