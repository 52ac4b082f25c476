use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;

use cinema_auth_types::identity::Identity;

use crate::error::CatalogError;
use crate::handlers::{JsonPath, MovieResponse};
use crate::state::AppState;
use crate::usecase::favorite::{AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /favorites/{movie_id}/add ───────────────────────────────────────────

pub async fn add_favorite(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(movie_id): JsonPath<i32>,
) -> Result<(StatusCode, Json<MessageResponse>), CatalogError> {
    let usecase = AddFavoriteUseCase {
        users: state.user_repo(),
        movies: state.movie_repo(),
        favorites: state.favorite_repo(),
    };
    let created = usecase.execute(&identity, movie_id).await?;
    let (status, message) = if created {
        (StatusCode::CREATED, "Movie added to favorites")
    } else {
        (StatusCode::OK, "Movie is already in favorites")
    };
    Ok((status, Json(MessageResponse { message })))
}

// ── DELETE /favorites/{movie_id}/remove ──────────────────────────────────────

pub async fn remove_favorite(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(movie_id): JsonPath<i32>,
) -> Result<StatusCode, CatalogError> {
    let usecase = RemoveFavoriteUseCase {
        users: state.user_repo(),
        movies: state.movie_repo(),
        favorites: state.favorite_repo(),
    };
    usecase.execute(&identity, movie_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /favorites/my-favorites ──────────────────────────────────────────────

#[derive(Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub spectator: i32,
    pub movie: MovieResponse,
}

#[derive(Serialize)]
pub struct FavoriteListResponse {
    pub favorites: Vec<FavoriteResponse>,
}

pub async fn my_favorites(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<FavoriteListResponse>, CatalogError> {
    let usecase = ListFavoritesUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let favorites = usecase.execute(&identity).await?;
    Ok(Json(FavoriteListResponse {
        favorites: favorites
            .into_iter()
            .map(|favorite| FavoriteResponse {
                id: favorite.id,
                spectator: favorite.spectator_id,
                movie: favorite.movie.into(),
            })
            .collect(),
    }))
}
