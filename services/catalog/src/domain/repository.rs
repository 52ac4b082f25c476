#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use cinema_domain::{MovieState, Source, UserRole};

use crate::domain::types::{
    AuthorRating, Credentials, Credits, Favorite, Movie, MovieDetails, MovieDraft, MovieFilter,
    MoviePatch, NewUser, Person, PopularPage, Rating, User, UserPatch,
};
use crate::error::{CatalogError, TmdbError};

/// Repository for users of either role.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, CatalogError>;
    async fn find_credentials(&self, username: &str)
    -> Result<Option<Credentials>, CatalogError>;
    /// Users of `role`, optionally restricted to one `source`, ordered by id.
    async fn list(&self, role: UserRole, source: Option<Source>)
    -> Result<Vec<User>, CatalogError>;
    /// Fails with a `username` validation error when the name is taken.
    async fn create(&self, user: &NewUser) -> Result<User, CatalogError>;
    async fn update(&self, id: i32, patch: &UserPatch) -> Result<User, CatalogError>;
    /// Delete a user and, by cascade, their ratings and favorites. Returns
    /// `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogError>;
}

/// Repository for movies and their author links.
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, CatalogError>;
    async fn list(&self, filter: &MovieFilter) -> Result<Vec<Movie>, CatalogError>;
    /// Exact match on every content column of `draft` except `source`.
    async fn find_by_content(&self, draft: &MovieDraft) -> Result<Option<Movie>, CatalogError>;
    /// Fails with a `non_field_errors` validation error when
    /// `(title, status, release_date)` is taken.
    async fn create(&self, draft: &MovieDraft) -> Result<Movie, CatalogError>;
    async fn update(&self, id: i32, patch: &MoviePatch) -> Result<Movie, CatalogError>;
    async fn set_state(&self, id: i32, state: MovieState) -> Result<Movie, CatalogError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogError>;
    /// Link an author. Linking twice is a no-op.
    async fn add_author(&self, movie_id: i32, author_id: i32) -> Result<(), CatalogError>;
    async fn count_by_author(&self, author_id: i32) -> Result<u64, CatalogError>;
    /// Returns the number of deleted movies.
    async fn delete_by_source(&self, source: Source) -> Result<u64, CatalogError>;
}

/// Repository for movie and author ratings.
pub trait RatingRepository: Send + Sync {
    /// Always inserts; a spectator may rate the same movie repeatedly.
    async fn add_movie_rating(
        &self,
        spectator_id: i32,
        movie_id: i32,
        rating: i32,
    ) -> Result<Rating, CatalogError>;

    /// Insert or update the single rating a spectator holds for an author.
    /// Returns the stored row and `true` if it was created.
    async fn upsert_author_rating(
        &self,
        spectator_id: i32,
        author_id: i32,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<(AuthorRating, bool), CatalogError>;
}

/// Repository for spectators' favorite movies.
pub trait FavoriteRepository: Send + Sync {
    /// Returns `true` if the favorite was created, `false` if it already existed.
    async fn add(&self, spectator_id: i32, movie_id: i32) -> Result<bool, CatalogError>;
    /// Returns `true` if a row was deleted.
    async fn remove(&self, spectator_id: i32, movie_id: i32) -> Result<bool, CatalogError>;
    async fn list(&self, spectator_id: i32) -> Result<Vec<Favorite>, CatalogError>;
}

/// Blacklist of refresh tokens revoked by logout.
pub trait RevokedTokenRepository: Send + Sync {
    async fn is_revoked(&self, jti: &str) -> Result<bool, CatalogError>;
    /// Returns `false` if `jti` was already revoked.
    async fn revoke(
        &self,
        jti: &str,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, CatalogError>;
}

/// Read-only port onto the external movie-metadata API.
pub trait MovieMetadataSource: Send + Sync {
    async fn popular(&self, page: u32) -> Result<PopularPage, TmdbError>;
    async fn movie_details(&self, movie_id: i64) -> Result<MovieDetails, TmdbError>;
    async fn credits(&self, movie_id: i64) -> Result<Credits, TmdbError>;
    async fn person(&self, person_id: i64) -> Result<Person, TmdbError>;
}
