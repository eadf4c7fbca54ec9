use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProducerAlias::Table)
                    .if_not_exists()
                    .col(integer(ProducerAlias::ProducerId))
                    .col(string(ProducerAlias::Alias))
                    .primary_key(
                        Index::create().col(ProducerAlias::ProducerId).col(ProducerAlias::Alias),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_producer_alias_producer")
                            .from(ProducerAlias::Table, ProducerAlias::ProducerId)
                            .to(Producer::Table, Producer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_producer_alias_alias")
                    .table(ProducerAlias::Table)
                    .col(ProducerAlias::Alias)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProducerAlias::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProducerAlias {
    Table,
    ProducerId,
    Alias,
}

#[derive(DeriveIden)]
enum Producer {
    Table,
    Id,
}
