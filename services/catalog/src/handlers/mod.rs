pub mod author;
pub mod favorite;
pub mod movie;
pub mod rating;
pub mod spectator;
pub mod token;
pub mod user;

use anyhow::anyhow;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use cinema_domain::{MovieState, MovieStatus, Source, UserRole};

use crate::domain::types::{Movie, User};
use crate::error::{CatalogError, FieldErrors};

// ── Request body ─────────────────────────────────────────────────────────────

/// JSON body that tolerates an empty request (treated as `{}`) and renders
/// parse failures as a 400 field error instead of axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = CatalogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            CatalogError::Validation(FieldErrors::single("non_field_errors", e.body_text()))
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            CatalogError::Validation(FieldErrors::single(
                "non_field_errors",
                format!("JSON parse error - {e}"),
            ))
        })
    }
}

/// Read an integer field that may arrive as a JSON number or a numeric
/// string. `null` and absence are `None`; anything else is a field error.
pub fn integer_field(field: &str, raw: Option<Value>) -> Result<Option<i64>, CatalogError> {
    let parsed = match raw {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| {
            CatalogError::Validation(FieldErrors::single(field, "A valid integer is required."))
        })
}

// ── Path parameters ──────────────────────────────────────────────────────────

/// Path extractor whose rejection is a JSON 404: an id that does not parse
/// cannot name any row.
pub struct JsonPath<T>(pub T);

impl<S, T> FromRequestParts<S> for JsonPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                tracing::debug!(error = %e.body_text(), "unresolvable path parameter");
                Err(CatalogError::NotFound)
            }
            Err(e) => Err(CatalogError::Internal(anyhow!(e.body_text()))),
        }
    }
}

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub source: Source,
    pub date_of_birth: Option<NaiveDate>,
    pub favorite_movies: Vec<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            bio: user.bio,
            avatar: user.avatar,
            source: user.source,
            date_of_birth: user.date_of_birth,
            favorite_movies: user.favorite_movies,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub overview: String,
    pub release_date: NaiveDate,
    pub rating: i32,
    pub status: MovieStatus,
    pub authors: Vec<UserResponse>,
    pub source: Source,
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub state: MovieState,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            release_date: movie.release_date,
            rating: movie.rating,
            status: movie.status,
            authors: movie.authors.into_iter().map(UserResponse::from).collect(),
            source: movie.source,
            genres: movie.genres,
            original_title: movie.original_title,
            original_language: movie.original_language,
            state: movie.state,
        }
    }
}
