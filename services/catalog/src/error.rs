use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Per-field validation messages, rendered as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise [`CatalogError::Validation`].
    pub fn into_result(self) -> Result<(), CatalogError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(self))
        }
    }
}

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("movie not found")]
    MovieNotFound,
    #[error("author not found")]
    AuthorNotFound,
    #[error("spectator not found")]
    SpectatorNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("movie is not in favorites")]
    NotInFavorites,
    #[error("Not found.")]
    NotFound,
    #[error("invalid input")]
    Validation(FieldErrors),
    #[error("Rating value is required")]
    RatingRequired,
    #[error("Cannot delete this author: at least one film is associated with them.")]
    AuthorHasMovies,
    #[error("Refresh token is required.")]
    RefreshRequired,
    #[error("Invalid token or already blacklisted.")]
    LogoutFailed,
    #[error("Authentication credentials were not provided.")]
    Unauthorized,
    #[error("No active account found with the given credentials")]
    InvalidCredentials,
    #[error("Token is invalid or expired")]
    InvalidToken,
    #[error("You do not have permission to perform this action.")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::SpectatorNotFound => "SPECTATOR_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotInFavorites => "NOT_IN_FAVORITES",
            Self::NotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION",
            Self::RatingRequired => "RATING_REQUIRED",
            Self::AuthorHasMovies => "AUTHOR_HAS_MOVIES",
            Self::RefreshRequired => "REFRESH_REQUIRED",
            Self::LogoutFailed => "LOGOUT_FAILED",
            Self::Unauthorized => "NOT_AUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "TOKEN_NOT_VALID",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Authentication, token and unresolvable-path failures answer with
    /// `detail` instead of `error`.
    fn uses_detail(&self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::RefreshRequired
                | Self::LogoutFailed
                | Self::Unauthorized
                | Self::InvalidCredentials
                | Self::InvalidToken
                | Self::Forbidden
        )
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MovieNotFound
            | Self::AuthorNotFound
            | Self::SpectatorNotFound
            | Self::UserNotFound
            | Self::NotInFavorites
            | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_)
            | Self::RatingRequired
            | Self::AuthorHasMovies
            | Self::RefreshRequired
            | Self::LogoutFailed => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = match &self {
            Self::Validation(fields) => serde_json::json!({
                "kind": self.kind(),
                "error": fields,
            }),
            e if e.uses_detail() => serde_json::json!({
                "kind": self.kind(),
                "detail": self.to_string(),
            }),
            _ => serde_json::json!({
                "kind": self.kind(),
                "error": self.to_string(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Failures talking to the TMDB API.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("TMDB returned {status} for `{endpoint}`: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("request to TMDB `{endpoint}` failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected TMDB payload for `{endpoint}`")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons an import run aborts.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Upstream(#[from] TmdbError),
    #[error("TMDB movie {tmdb_id} has no usable release date ({value:?})")]
    InvalidReleaseDate { tmdb_id: i64, value: Option<String> },
    #[error("user `{username}` already exists and is not an author")]
    NotAnAuthor { username: String },
    #[error("catalog store failed")]
    Store(#[from] CatalogError),
}
