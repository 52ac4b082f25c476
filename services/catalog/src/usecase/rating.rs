use cinema_auth_types::identity::Identity;
use cinema_domain::UserRole;

use crate::domain::policy::acting_spectator;
use crate::domain::repository::{MovieRepository, RatingRepository, UserRepository};
use crate::domain::types::{AuthorRating, Rating, validate_rating};
use crate::error::{CatalogError, FieldErrors};

/// A missing or zero rating is "required"; anything else must be in 1..=10.
fn checked_rating(rating: Option<i64>) -> Result<i32, CatalogError> {
    let rating = match rating {
        None | Some(0) => return Err(CatalogError::RatingRequired),
        Some(rating) => rating,
    };
    let mut errors = FieldErrors::new();
    let clamped = rating.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    validate_rating("rating", clamped, &mut errors);
    errors.into_result()?;
    Ok(clamped)
}

// ── RateMovie ────────────────────────────────────────────────────────────────

pub struct RateMovieUseCase<U: UserRepository, M: MovieRepository, R: RatingRepository> {
    pub users: U,
    pub movies: M,
    pub ratings: R,
}

impl<U: UserRepository, M: MovieRepository, R: RatingRepository> RateMovieUseCase<U, M, R> {
    /// Always records a new rating; earlier ratings by the same spectator stay.
    pub async fn execute(
        &self,
        identity: &Identity,
        movie_id: i32,
        rating: Option<i64>,
    ) -> Result<Rating, CatalogError> {
        let spectator = acting_spectator(&self.users, identity).await?;
        if self.movies.find_by_id(movie_id).await?.is_none() {
            return Err(CatalogError::MovieNotFound);
        }
        let rating = checked_rating(rating)?;
        self.ratings
            .add_movie_rating(spectator.id, movie_id, rating)
            .await
    }
}

// ── RateAuthor ───────────────────────────────────────────────────────────────

pub struct RateAuthorInput {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

pub struct RateAuthorUseCase<U: UserRepository, R: RatingRepository> {
    pub users: U,
    pub ratings: R,
}

impl<U: UserRepository, R: RatingRepository> RateAuthorUseCase<U, R> {
    /// Upsert the spectator's rating of an author. Returns the stored rating and
    /// `true` if it was newly created.
    pub async fn execute(
        &self,
        identity: &Identity,
        author_id: i32,
        input: RateAuthorInput,
    ) -> Result<(AuthorRating, bool), CatalogError> {
        let spectator = acting_spectator(&self.users, identity).await?;
        let is_author = self
            .users
            .find_by_id(author_id)
            .await?
            .is_some_and(|user| user.role == UserRole::Author);
        if !is_author {
            return Err(CatalogError::AuthorNotFound);
        }
        let rating = checked_rating(input.rating)?;
        self.ratings
            .upsert_author_rating(spectator.id, author_id, rating, input.comment.as_deref())
            .await
    }
}
