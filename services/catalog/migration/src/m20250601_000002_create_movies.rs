use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Movies::Overview).text().not_null())
                    .col(ColumnDef::new(Movies::ReleaseDate).date().not_null())
                    .col(
                        ColumnDef::new(Movies::Rating)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Movies::Status)
                            .string_len(20)
                            .not_null()
                            .default("released"),
                    )
                    .col(
                        ColumnDef::new(Movies::Source)
                            .string_len(20)
                            .not_null()
                            .default("manual"),
                    )
                    .col(ColumnDef::new(Movies::Genres).string().null())
                    .col(ColumnDef::new(Movies::OriginalTitle).string().null())
                    .col(ColumnDef::new(Movies::OriginalLanguage).string_len(10).null())
                    .col(
                        ColumnDef::new(Movies::State)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Movies::Table)
                    .col(Movies::Title)
                    .col(Movies::Status)
                    .col(Movies::ReleaseDate)
                    .unique()
                    .name("uq_movies_title_status_release_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    Title,
    Overview,
    ReleaseDate,
    Rating,
    Status,
    Source,
    Genres,
    OriginalTitle,
    OriginalLanguage,
    State,
}
