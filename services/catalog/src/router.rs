use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use cinema_core::health::{healthz, readyz};
use cinema_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    author::{delete_author, get_author, list_authors, update_author},
    favorite::{add_favorite, my_favorites, remove_favorite},
    movie::{
        archive_movie, create_movie, delete_movie, get_movie, list_movies, list_movies_by_status,
        update_movie,
    },
    rating::{add_to_author, add_to_movie},
    spectator::{delete_spectator, get_spectator, list_spectators, update_spectator},
    token::{logout, obtain_token, refresh_token},
    user::register,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Movies
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/by-status", get(list_movies_by_status))
        .route(
            "/movies/{id}",
            get(get_movie)
                .put(update_movie)
                .patch(update_movie)
                .delete(delete_movie),
        )
        .route("/movies/{id}/archive", patch(archive_movie))
        // Authors
        .route("/authors", get(list_authors))
        .route(
            "/authors/{id}",
            get(get_author)
                .put(update_author)
                .patch(update_author)
                .delete(delete_author),
        )
        // Spectators
        .route("/spectators", get(list_spectators))
        .route(
            "/spectators/{id}",
            get(get_spectator)
                .put(update_spectator)
                .patch(update_spectator)
                .delete(delete_spectator),
        )
        // Favorites
        .route("/favorites/{movie_id}/add", post(add_favorite))
        .route("/favorites/{movie_id}/remove", delete(remove_favorite))
        .route("/favorites/my-favorites", get(my_favorites))
        // Ratings
        .route("/ratings/{movie_id}/add-to-movie", post(add_to_movie))
        .route("/ratings/{author_id}/add-to-author", post(add_to_author))
        // Users and tokens
        .route("/users/register", post(register))
        .route("/token", post(obtain_token))
        .route("/token/refresh", post(refresh_token))
        .route("/logout", post(logout))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
