use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cinema_auth_types::identity::Identity;

use crate::error::CatalogError;
use crate::handlers::{JsonBody, JsonPath, integer_field};
use crate::state::AppState;
use crate::usecase::rating::{RateAuthorInput, RateAuthorUseCase, RateMovieUseCase};

// ── POST /ratings/{movie_id}/add-to-movie ────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RateMovieRequest {
    /// A number or a numeric string.
    pub rating: Option<Value>,
}

#[derive(Serialize)]
pub struct MovieRatingResponse {
    pub id: i32,
    pub spectator: i32,
    pub movie: i32,
    pub rating: i32,
}

#[derive(Serialize)]
pub struct RateMovieResponse {
    pub message: &'static str,
    pub rating: MovieRatingResponse,
}

pub async fn add_to_movie(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(movie_id): JsonPath<i32>,
    JsonBody(body): JsonBody<RateMovieRequest>,
) -> Result<(StatusCode, Json<RateMovieResponse>), CatalogError> {
    let usecase = RateMovieUseCase {
        users: state.user_repo(),
        movies: state.movie_repo(),
        ratings: state.rating_repo(),
    };
    let value = integer_field("rating", body.rating)?;
    let rating = usecase.execute(&identity, movie_id, value).await?;
    Ok((
        StatusCode::CREATED,
        Json(RateMovieResponse {
            message: "Rating added",
            rating: MovieRatingResponse {
                id: rating.id,
                spectator: rating.spectator_id,
                movie: rating.movie_id,
                rating: rating.rating,
            },
        }),
    ))
}

// ── POST /ratings/{author_id}/add-to-author ──────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RateAuthorRequest {
    pub rating: Option<Value>,
    pub comment: Option<String>,
}

#[derive(Serialize)]
pub struct AuthorRatingResponse {
    pub id: i32,
    pub spectator: i32,
    pub author: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Serialize)]
pub struct RateAuthorResponse {
    pub message: &'static str,
    pub rating: AuthorRatingResponse,
}

/// 201 on the first rating of this author, 200 when an existing one is updated.
pub async fn add_to_author(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(author_id): JsonPath<i32>,
    JsonBody(body): JsonBody<RateAuthorRequest>,
) -> Result<(StatusCode, Json<RateAuthorResponse>), CatalogError> {
    let usecase = RateAuthorUseCase {
        users: state.user_repo(),
        ratings: state.rating_repo(),
    };
    let (rating, created) = usecase
        .execute(
            &identity,
            author_id,
            RateAuthorInput {
                rating: integer_field("rating", body.rating)?,
                comment: body.comment,
            },
        )
        .await?;
    let (status, message) = if created {
        (StatusCode::CREATED, "Rating added")
    } else {
        (StatusCode::OK, "Rating updated")
    };
    Ok((
        status,
        Json(RateAuthorResponse {
            message,
            rating: AuthorRatingResponse {
                id: rating.id,
                spectator: rating.spectator_id,
                author: rating.author_id,
                rating: rating.rating,
                comment: rating.comment,
            },
        }),
    ))
}
