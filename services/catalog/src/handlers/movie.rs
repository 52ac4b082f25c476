use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinema_auth_types::identity::Identity;
use cinema_domain::MovieState;
use cinema_domain::ordering::parse_ordering;

use crate::domain::types::{MovieFilter, MovieOrder};
use crate::error::CatalogError;
use crate::handlers::{JsonBody, JsonPath, MovieResponse};
use crate::state::AppState;
use crate::usecase::movie::{
    ArchiveMovieUseCase, CreateMovieInput, CreateMovieUseCase, DeleteMovieUseCase,
    GetMovieUseCase, ListMoviesByStatusUseCase, ListMoviesUseCase, UpdateMovieInput,
    UpdateMovieUseCase,
};

// ── GET /movies ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct MovieListQuery {
    pub source: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl MovieListQuery {
    fn into_filter(self) -> MovieFilter {
        let ordering = self
            .ordering
            .as_deref()
            .map(|raw| {
                parse_ordering(raw, MovieOrder::FIELDS)
                    .into_iter()
                    .filter_map(|(field, sort)| MovieOrder::from_field(field).map(|f| (f, sort)))
                    .collect()
            })
            .unwrap_or_default();
        MovieFilter {
            // Unknown sources are ignored rather than rejected.
            source: self.source.as_deref().and_then(|raw| raw.parse().ok()),
            status: None,
            search: self.search.filter(|s| !s.trim().is_empty()),
            ordering,
        }
    }
}

pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieListQuery>,
) -> Result<Json<Vec<MovieResponse>>, CatalogError> {
    let usecase = ListMoviesUseCase {
        repo: state.movie_repo(),
    };
    let movies = usecase.execute(query.into_filter()).await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

// ── GET /movies/by-status ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ByStatusQuery {
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct MovieListResponse {
    pub count: usize,
    pub results: Vec<MovieResponse>,
}

pub async fn list_movies_by_status(
    State(state): State<AppState>,
    Query(query): Query<ByStatusQuery>,
) -> Result<Json<MovieListResponse>, CatalogError> {
    let usecase = ListMoviesByStatusUseCase {
        repo: state.movie_repo(),
    };
    let movies = usecase.execute(query.status.as_deref()).await?;
    Ok(Json(MovieListResponse {
        count: movies.len(),
        results: movies.into_iter().map(MovieResponse::from).collect(),
    }))
}

// ── GET /movies/{id} ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MovieEnvelope {
    pub movie: MovieResponse,
}

pub async fn get_movie(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<MovieEnvelope>, CatalogError> {
    let usecase = GetMovieUseCase {
        repo: state.movie_repo(),
    };
    let movie = usecase.execute(id).await?;
    Ok(Json(MovieEnvelope {
        movie: movie.into(),
    }))
}

// ── POST /movies ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct MovieRequest {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<i32>,
    pub status: Option<String>,
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
}

#[derive(Serialize)]
pub struct MovieMessageResponse {
    pub message: &'static str,
    pub movie: MovieResponse,
}

pub async fn create_movie(
    identity: Identity,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<MovieRequest>,
) -> Result<(StatusCode, Json<MovieMessageResponse>), CatalogError> {
    let usecase = CreateMovieUseCase {
        movies: state.movie_repo(),
        users: state.user_repo(),
    };
    let movie = usecase
        .execute(
            &identity,
            CreateMovieInput {
                title: body.title,
                overview: body.overview,
                release_date: body.release_date,
                rating: body.rating,
                status: body.status,
                genres: body.genres,
                original_title: body.original_title,
                original_language: body.original_language,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MovieMessageResponse {
            message: "Movie created",
            movie: movie.into(),
        }),
    ))
}

// ── PUT/PATCH /movies/{id} ───────────────────────────────────────────────────

pub async fn update_movie(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
    JsonBody(body): JsonBody<MovieRequest>,
) -> Result<Json<MovieMessageResponse>, CatalogError> {
    let usecase = UpdateMovieUseCase {
        repo: state.movie_repo(),
    };
    let movie = usecase
        .execute(
            &identity,
            id,
            UpdateMovieInput {
                title: body.title,
                overview: body.overview,
                release_date: body.release_date,
                rating: body.rating,
                status: body.status,
                genres: body.genres,
                original_title: body.original_title,
                original_language: body.original_language,
            },
        )
        .await?;
    Ok(Json(MovieMessageResponse {
        message: "Movie updated",
        movie: movie.into(),
    }))
}

// ── DELETE /movies/{id} ──────────────────────────────────────────────────────

pub async fn delete_movie(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteMovieUseCase {
        repo: state.movie_repo(),
    };
    usecase.execute(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PATCH /movies/{id}/archive ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct ArchiveResponse {
    pub message: String,
    pub movie_id: i32,
    pub new_state: MovieState,
}

pub async fn archive_movie(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<ArchiveResponse>, CatalogError> {
    let usecase = ArchiveMovieUseCase {
        repo: state.movie_repo(),
    };
    let movie = usecase.execute(&identity, id).await?;
    Ok(Json(ArchiveResponse {
        message: format!("Movie '{}' archived successfully", movie.title),
        movie_id: movie.id,
        new_state: movie.state,
    }))
}
