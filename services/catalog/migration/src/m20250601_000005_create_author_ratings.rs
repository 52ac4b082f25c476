use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthorRatings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuthorRatings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AuthorRatings::SpectatorId).integer().not_null())
                    .col(ColumnDef::new(AuthorRatings::AuthorId).integer().not_null())
                    .col(ColumnDef::new(AuthorRatings::Rating).integer().not_null())
                    .col(ColumnDef::new(AuthorRatings::Comment).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AuthorRatings::Table, AuthorRatings::SpectatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AuthorRatings::Table, AuthorRatings::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(AuthorRatings::Table)
                    .col(AuthorRatings::SpectatorId)
                    .col(AuthorRatings::AuthorId)
                    .unique()
                    .name("uq_author_ratings_spectator_author")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthorRatings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AuthorRatings {
    Table,
    Id,
    SpectatorId,
    AuthorId,
    Rating,
    Comment,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
