use sea_orm::DatabaseConnection;

use cinema_auth_types::identity::TokenSecret;

use crate::infra::db::{
    DbFavoriteRepository, DbMovieRepository, DbRatingRepository, DbRevokedTokenRepository,
    DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub access_token_ttl: u64,
    pub refresh_token_ttl: u64,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn movie_repo(&self) -> DbMovieRepository {
        DbMovieRepository {
            db: self.db.clone(),
        }
    }

    pub fn rating_repo(&self) -> DbRatingRepository {
        DbRatingRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn revoked_token_repo(&self) -> DbRevokedTokenRepository {
        DbRevokedTokenRepository {
            db: self.db.clone(),
        }
    }
}

impl TokenSecret for AppState {
    fn token_secret(&self) -> &str {
        &self.jwt_secret
    }
}
