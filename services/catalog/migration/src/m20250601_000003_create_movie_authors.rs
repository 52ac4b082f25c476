use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieAuthors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieAuthors::MovieId).integer().not_null())
                    .col(ColumnDef::new(MovieAuthors::AuthorId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(MovieAuthors::MovieId)
                            .col(MovieAuthors::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieAuthors::Table, MovieAuthors::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MovieAuthors::Table, MovieAuthors::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieAuthors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MovieAuthors {
    Table,
    MovieId,
    AuthorId,
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
