use cinema_auth_types::identity::Identity;

use crate::domain::policy::acting_spectator;
use crate::domain::repository::{FavoriteRepository, MovieRepository, UserRepository};
use crate::domain::types::Favorite;
use crate::error::CatalogError;

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<U: UserRepository, M: MovieRepository, F: FavoriteRepository> {
    pub users: U,
    pub movies: M,
    pub favorites: F,
}

impl<U: UserRepository, M: MovieRepository, F: FavoriteRepository> AddFavoriteUseCase<U, M, F> {
    /// Returns `true` if the favorite was created, `false` if it already existed.
    pub async fn execute(&self, identity: &Identity, movie_id: i32) -> Result<bool, CatalogError> {
        let spectator = acting_spectator(&self.users, identity).await?;
        if self.movies.find_by_id(movie_id).await?.is_none() {
            return Err(CatalogError::MovieNotFound);
        }
        self.favorites.add(spectator.id, movie_id).await
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<U: UserRepository, M: MovieRepository, F: FavoriteRepository> {
    pub users: U,
    pub movies: M,
    pub favorites: F,
}

impl<U: UserRepository, M: MovieRepository, F: FavoriteRepository>
    RemoveFavoriteUseCase<U, M, F>
{
    pub async fn execute(&self, identity: &Identity, movie_id: i32) -> Result<(), CatalogError> {
        let spectator = acting_spectator(&self.users, identity).await?;
        if self.movies.find_by_id(movie_id).await?.is_none() {
            return Err(CatalogError::MovieNotFound);
        }
        let removed = self.favorites.remove(spectator.id, movie_id).await?;
        if !removed {
            return Err(CatalogError::NotInFavorites);
        }
        Ok(())
    }
}

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> ListFavoritesUseCase<U, F> {
    pub async fn execute(&self, identity: &Identity) -> Result<Vec<Favorite>, CatalogError> {
        let spectator = acting_spectator(&self.users, identity).await?;
        self.favorites.list(spectator.id).await
    }
}
