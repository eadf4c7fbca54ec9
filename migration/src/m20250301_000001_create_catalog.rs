use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string(Movie::Title))
                    .col(integer(Movie::Year))
                    .col(boolean(Movie::Winner).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_natural_key")
                    .table(Movie::Table)
                    .col(Movie::Year)
                    .col(Movie::Title)
                    .col(Movie::Winner)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Studio::Table)
                    .if_not_exists()
                    .col(pk_auto(Studio::Id))
                    .col(string(Studio::Name).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Producer::Table)
                    .if_not_exists()
                    .col(pk_auto(Producer::Id))
                    .col(string(Producer::Name).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieStudio::Table)
                    .if_not_exists()
                    .col(integer(MovieStudio::MovieId))
                    .col(integer(MovieStudio::StudioId))
                    .primary_key(
                        Index::create().col(MovieStudio::MovieId).col(MovieStudio::StudioId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_studio_movie")
                            .from(MovieStudio::Table, MovieStudio::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_studio_studio")
                            .from(MovieStudio::Table, MovieStudio::StudioId)
                            .to(Studio::Table, Studio::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieProducer::Table)
                    .if_not_exists()
                    .col(integer(MovieProducer::MovieId))
                    .col(integer(MovieProducer::ProducerId))
                    .primary_key(
                        Index::create().col(MovieProducer::MovieId).col(MovieProducer::ProducerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_producer_movie")
                            .from(MovieProducer::Table, MovieProducer::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_producer_producer")
                            .from(MovieProducer::Table, MovieProducer::ProducerId)
                            .to(Producer::Table, Producer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_studio_studio")
                    .table(MovieStudio::Table)
                    .col(MovieStudio::StudioId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieProducer::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieStudio::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Producer::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Studio::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Year,
    Winner,
}

#[derive(DeriveIden)]
enum Studio {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Producer {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum MovieStudio {
    Table,
    MovieId,
    StudioId,
}

#[derive(DeriveIden)]
enum MovieProducer {
    Table,
    MovieId,
    ProducerId,
}
