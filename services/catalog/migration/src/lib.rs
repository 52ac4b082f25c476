use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_movies;
mod m20250601_000003_create_movie_authors;
mod m20250601_000004_create_ratings;
mod m20250601_000005_create_author_ratings;
mod m20250601_000006_create_favorites;
mod m20250601_000007_create_revoked_tokens;
mod m20250601_000008_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_movies::Migration),
            Box::new(m20250601_000003_create_movie_authors::Migration),
            Box::new(m20250601_000004_create_ratings::Migration),
            Box::new(m20250601_000005_create_author_ratings::Migration),
            Box::new(m20250601_000006_create_favorites::Migration),
            Box::new(m20250601_000007_create_revoked_tokens::Migration),
            Box::new(m20250601_000008_add_lookup_indexes::Migration),
        ]
    }
}
