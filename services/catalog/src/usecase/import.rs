use chrono::NaiveDate;
use tracing::{info, warn};

use cinema_domain::{MovieStatus, Source, UserRole};

use crate::domain::repository::{MovieMetadataSource, MovieRepository, UserRepository};
use crate::domain::types::{
    MovieDetails, MovieDraft, NewUser, User, UserPatch, director_username,
    rating_from_vote_average,
};
use crate::error::ImportError;

/// Birth date recorded for directors whose TMDB profile has none: 1970-01-01.
pub fn fallback_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Counts reported at the end of an import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub tmdb_movies_removed: u64,
    pub movies_seen: usize,
    pub authors_created: usize,
    pub movies_created: usize,
    pub skipped_without_director: usize,
}

/// One-shot TMDB import: drop every `tmdb` movie, then rebuild from one page of
/// popular movies.
///
/// Runs sequentially with no wrapping transaction. The first failure aborts the
/// run and everything written before it stays.
pub struct ImportTmdbUseCase<S: MovieMetadataSource, U: UserRepository, M: MovieRepository> {
    pub source: S,
    pub users: U,
    pub movies: M,
}

impl<S: MovieMetadataSource, U: UserRepository, M: MovieRepository> ImportTmdbUseCase<S, U, M> {
    pub async fn execute(&self, page: u32) -> Result<ImportSummary, ImportError> {
        let mut summary = ImportSummary {
            tmdb_movies_removed: self.movies.delete_by_source(Source::Tmdb).await?,
            ..Default::default()
        };
        info!(removed = summary.tmdb_movies_removed, "cleared TMDB movies");

        let popular = self.source.popular(page).await?;
        for entry in popular.results {
            summary.movies_seen += 1;
            let details = self.source.movie_details(entry.id).await?;
            let draft = movie_draft(entry.id, details)?;

            let credits = self.source.credits(entry.id).await?;
            let Some(director) = credits.director() else {
                warn!(tmdb_id = entry.id, title = %draft.title, "no director credited, skipping");
                summary.skipped_without_director += 1;
                continue;
            };

            let person = self.source.person(director.id).await?;
            let birthday = person
                .birthday
                .as_deref()
                .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
                .unwrap_or_else(fallback_birthday);

            let (author, created) = self
                .upsert_author(&director_username(&director.name), birthday)
                .await?;
            if created {
                summary.authors_created += 1;
                info!(author = %director.name, username = %author.username, "created author");
            }

            let movie = match self.movies.find_by_content(&draft).await? {
                Some(movie) => movie,
                None => {
                    let movie = self.movies.create(&draft).await?;
                    summary.movies_created += 1;
                    info!(
                        title = %movie.title,
                        director = %director.name,
                        "created movie"
                    );
                    movie
                }
            };
            self.movies.add_author(movie.id, author.id).await?;
        }

        Ok(summary)
    }

    /// Find the author by username or create it. An existing author's birth
    /// date is brought in line with TMDB.
    async fn upsert_author(
        &self,
        username: &str,
        birthday: NaiveDate,
    ) -> Result<(User, bool), ImportError> {
        match self.users.find_by_username(username).await? {
            Some(user) if user.role != UserRole::Author => Err(ImportError::NotAnAuthor {
                username: username.to_owned(),
            }),
            Some(user) if user.date_of_birth == Some(birthday) => Ok((user, false)),
            Some(user) => {
                let patch = UserPatch {
                    date_of_birth: Some(birthday),
                    ..Default::default()
                };
                Ok((self.users.update(user.id, &patch).await?, false))
            }
            None => {
                let user = self
                    .users
                    .create(&NewUser {
                        username: username.to_owned(),
                        email: format!("{username}@tmdb.local"),
                        password_hash: None,
                        role: UserRole::Author,
                        bio: None,
                        avatar: None,
                        source: Source::Tmdb,
                        date_of_birth: Some(birthday),
                    })
                    .await?;
                Ok((user, true))
            }
        }
    }
}

/// Map a TMDB detail payload onto the catalog's movie columns.
fn movie_draft(tmdb_id: i64, details: MovieDetails) -> Result<MovieDraft, ImportError> {
    let release_date = details
        .release_date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or_else(|| ImportError::InvalidReleaseDate {
            tmdb_id,
            value: details.release_date.clone(),
        })?;
    let genres = details
        .genres
        .iter()
        .map(|genre| genre.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let original_title = details
        .original_title
        .unwrap_or_else(|| details.title.clone());

    Ok(MovieDraft {
        rating: rating_from_vote_average(details.vote_average),
        status: MovieStatus::from_tmdb_label(details.status.as_deref()),
        source: Source::Tmdb,
        genres: (!genres.is_empty()).then_some(genres),
        original_title: Some(original_title),
        original_language: details.original_language,
        title: details.title,
        overview: details.overview,
        release_date,
    })
}
