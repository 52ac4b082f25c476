use chrono::NaiveDate;

use cinema_auth_types::identity::Identity;
use cinema_domain::{MovieState, MovieStatus, Source, UserRole};

use crate::domain::policy::require_author;
use crate::domain::repository::{MovieRepository, UserRepository};
use crate::domain::types::{Movie, MovieDraft, MovieFilter, MoviePatch};
use crate::error::{CatalogError, FieldErrors};

fn parse_status(raw: &str, errors: &mut FieldErrors) -> Option<MovieStatus> {
    match raw.parse() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.add("status", format!("\"{raw}\" is not a valid choice."));
            None
        }
    }
}

// ── ListMovies ───────────────────────────────────────────────────────────────

pub struct ListMoviesUseCase<M: MovieRepository> {
    pub repo: M,
}

impl<M: MovieRepository> ListMoviesUseCase<M> {
    pub async fn execute(&self, filter: MovieFilter) -> Result<Vec<Movie>, CatalogError> {
        self.repo.list(&filter).await
    }
}

// ── ListMoviesByStatus ───────────────────────────────────────────────────────

pub struct ListMoviesByStatusUseCase<M: MovieRepository> {
    pub repo: M,
}

impl<M: MovieRepository> ListMoviesByStatusUseCase<M> {
    /// No status lists everything. A status that names no known value matches
    /// nothing.
    pub async fn execute(&self, status: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        let status = match status {
            None => None,
            Some(raw) => match raw.parse::<MovieStatus>() {
                Ok(status) => Some(status),
                Err(_) => return Ok(vec![]),
            },
        };
        self.repo
            .list(&MovieFilter {
                status,
                ..Default::default()
            })
            .await
    }
}

// ── GetMovie ─────────────────────────────────────────────────────────────────

pub struct GetMovieUseCase<M: MovieRepository> {
    pub repo: M,
}

impl<M: MovieRepository> GetMovieUseCase<M> {
    pub async fn execute(&self, id: i32) -> Result<Movie, CatalogError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound)
    }
}

// ── CreateMovie ──────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct CreateMovieInput {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<i32>,
    pub status: Option<String>,
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
}

pub struct CreateMovieUseCase<M: MovieRepository, U: UserRepository> {
    pub movies: M,
    pub users: U,
}

impl<M: MovieRepository, U: UserRepository> CreateMovieUseCase<M, U> {
    /// Create a `manual` movie and link the calling author to it.
    pub async fn execute(
        &self,
        identity: &Identity,
        input: CreateMovieInput,
    ) -> Result<Movie, CatalogError> {
        require_author(identity)?;
        let author = self
            .users
            .find_by_id(identity.user_id)
            .await?
            .ok_or(CatalogError::Unauthorized)?;
        if author.role != UserRole::Author {
            return Err(CatalogError::Forbidden);
        }

        let mut errors = FieldErrors::new();
        let required = "This field is required.";
        if input.title.is_none() {
            errors.add("title", required);
        }
        if input.overview.is_none() {
            errors.add("overview", required);
        }
        if input.release_date.is_none() {
            errors.add("release_date", required);
        }
        if input.rating.is_none() {
            errors.add("rating", required);
        }
        let status = match input.status.as_deref() {
            Some(raw) => parse_status(raw, &mut errors),
            None => Some(MovieStatus::Released),
        };
        let (Some(title), Some(overview), Some(release_date), Some(rating), Some(status)) = (
            input.title,
            input.overview,
            input.release_date,
            input.rating,
            status,
        ) else {
            return Err(CatalogError::Validation(errors));
        };
        errors.into_result()?;

        let draft = MovieDraft {
            title,
            overview,
            release_date,
            rating,
            status,
            source: Source::Manual,
            genres: input.genres,
            original_title: input.original_title,
            original_language: input.original_language,
        };
        draft.validate()?;

        let movie = self.movies.create(&draft).await?;
        self.movies.add_author(movie.id, author.id).await?;
        self.movies
            .find_by_id(movie.id)
            .await?
            .ok_or(CatalogError::MovieNotFound)
    }
}

// ── UpdateMovie (PUT and PATCH) ──────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UpdateMovieInput {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<i32>,
    pub status: Option<String>,
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
}

pub struct UpdateMovieUseCase<M: MovieRepository> {
    pub repo: M,
}

impl<M: MovieRepository> UpdateMovieUseCase<M> {
    /// Always a partial update; absent fields keep their value.
    pub async fn execute(
        &self,
        identity: &Identity,
        id: i32,
        input: UpdateMovieInput,
    ) -> Result<Movie, CatalogError> {
        require_author(identity)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(CatalogError::MovieNotFound);
        }

        let mut errors = FieldErrors::new();
        let status = input
            .status
            .as_deref()
            .and_then(|raw| parse_status(raw, &mut errors));
        errors.into_result()?;

        let patch = MoviePatch {
            title: input.title,
            overview: input.overview,
            release_date: input.release_date,
            rating: input.rating,
            status,
            genres: input.genres,
            original_title: input.original_title,
            original_language: input.original_language,
        };
        patch.validate()?;
        self.repo.update(id, &patch).await
    }
}

// ── DeleteMovie ──────────────────────────────────────────────────────────────

pub struct DeleteMovieUseCase<M: MovieRepository> {
    pub repo: M,
}

impl<M: MovieRepository> DeleteMovieUseCase<M> {
    pub async fn execute(&self, identity: &Identity, id: i32) -> Result<(), CatalogError> {
        require_author(identity)?;
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(CatalogError::MovieNotFound);
        }
        Ok(())
    }
}

// ── ArchiveMovie ─────────────────────────────────────────────────────────────

pub struct ArchiveMovieUseCase<M: MovieRepository> {
    pub repo: M,
}

impl<M: MovieRepository> ArchiveMovieUseCase<M> {
    /// Idempotent: archiving an archived movie returns it unchanged.
    pub async fn execute(&self, identity: &Identity, id: i32) -> Result<Movie, CatalogError> {
        require_author(identity)?;
        let movie = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound)?;
        if movie.state == MovieState::Archived {
            return Ok(movie);
        }
        self.repo.set_state(id, MovieState::Archived).await
    }
}
