use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub winner: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_studio::Entity")]
    MovieStudio,
    #[sea_orm(has_many = "super::movie_producer::Entity")]
    MovieProducer,
}

impl Related<super::movie_studio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieStudio.def()
    }
}

impl Related<super::movie_producer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieProducer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
