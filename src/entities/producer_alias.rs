use sea_orm::entity::prelude::*;

/// One normalized identity credited through a producer row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "producer_alias")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub producer_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub alias: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::producer::Entity",
        from = "Column::ProducerId",
        to = "super::producer::Column::Id",
        on_delete = "Cascade"
    )]
    Producer,
}

impl Related<super::producer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Producer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
