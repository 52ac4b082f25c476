use anyhow::Context;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use cinema_catalog::config::CatalogConfig;
use cinema_catalog::router::build_router;
use cinema_catalog::state::AppState;
use cinema_catalog_migration::Migrator;
use cinema_core::config::load_dotenv;
use cinema_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    let config = CatalogConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to apply migrations")?;

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        access_token_ttl: config.access_token_ttl_secs,
        refresh_token_ttl: config.refresh_token_ttl_secs,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
