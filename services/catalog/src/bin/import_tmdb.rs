//! Operator command: rebuild the TMDB slice of the catalog from one page of
//! popular movies.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use cinema_catalog::config::ImportConfig;
use cinema_catalog::infra::db::{DbMovieRepository, DbUserRepository};
use cinema_catalog::infra::tmdb::TmdbClient;
use cinema_catalog::usecase::import::{ImportSummary, ImportTmdbUseCase};
use cinema_catalog_migration::Migrator;
use cinema_core::config::load_dotenv;
use cinema_core::tracing::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "import-tmdb", about = "Import popular movies and their directors from TMDB")]
struct Args {
    /// Page of `/movie/popular` to import.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    init_tracing();
    let args = Args::parse();

    match run(args.page).await {
        Ok(summary) => {
            info!(
                removed = summary.tmdb_movies_removed,
                seen = summary.movies_seen,
                authors_created = summary.authors_created,
                movies_created = summary.movies_created,
                skipped = summary.skipped_without_director,
                "import finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "import aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run(page: u32) -> anyhow::Result<ImportSummary> {
    let config = ImportConfig::from_env()?;
    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to apply migrations")?;

    let usecase = ImportTmdbUseCase {
        source: TmdbClient::new(
            reqwest::Client::new(),
            config.tmdb_api_key,
            config.tmdb_base_url,
        ),
        users: DbUserRepository { db: db.clone() },
        movies: DbMovieRepository { db },
    };
    Ok(usecase.execute(page).await?)
}
