use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "producer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_producer::Entity")]
    MovieProducer,
    #[sea_orm(has_many = "super::producer_alias::Entity")]
    ProducerAlias,
}

impl Related<super::movie_producer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieProducer.def()
    }
}

impl Related<super::producer_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProducerAlias.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
