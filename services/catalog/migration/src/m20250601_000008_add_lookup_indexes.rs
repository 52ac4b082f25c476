use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Movies::Table)
                    .col(Movies::Source)
                    .name("idx_movies_source")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(MovieAuthors::Table)
                    .col(MovieAuthors::AuthorId)
                    .name("idx_movie_authors_author_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Ratings::Table)
                    .col(Ratings::MovieId)
                    .name("idx_ratings_movie_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_ratings_movie_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movie_authors_author_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movies_source").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Source,
}

#[derive(Iden)]
enum MovieAuthors {
    Table,
    AuthorId,
}

#[derive(Iden)]
enum Ratings {
    Table,
    MovieId,
}
