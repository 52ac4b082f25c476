use cinema_core::config::{optional, required};

/// Catalog HTTP service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// sea-orm connection URL (PostgreSQL in production).
    pub database_url: String,
    /// HMAC secret for signing and verifying JWTs. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 8000). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
    /// Access token lifetime in seconds (default 300).
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds (default 86400).
    pub refresh_token_ttl_secs: u64,
}

impl CatalogConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            catalog_port: optional("CATALOG_PORT", 8000)?,
            access_token_ttl_secs: optional("ACCESS_TOKEN_TTL_SECS", 300)?,
            refresh_token_ttl_secs: optional("REFRESH_TOKEN_TTL_SECS", 86_400)?,
        })
    }
}

/// Configuration for the `import-tmdb` command.
#[derive(Debug)]
pub struct ImportConfig {
    pub database_url: String,
    /// Bearer token for the TMDB v3 API. Env var: `TMDB_API_KEY`.
    pub tmdb_api_key: String,
    /// Default `https://api.themoviedb.org/3`. Env var: `TMDB_BASE_URL`.
    pub tmdb_base_url: String,
}

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

impl ImportConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            tmdb_api_key: required("TMDB_API_KEY")?,
            tmdb_base_url: optional("TMDB_BASE_URL", DEFAULT_TMDB_BASE_URL.to_owned())?,
        })
    }
}
