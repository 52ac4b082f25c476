use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use cinema_auth_types::identity::Identity;

use crate::error::CatalogError;
use crate::handlers::user::UpdateUserRequest;
use crate::handlers::{JsonBody, JsonPath, UserResponse};
use crate::state::AppState;
use crate::usecase::author::{
    DeleteAuthorUseCase, GetAuthorUseCase, ListAuthorsUseCase, UpdateAuthorUseCase,
};

// ── GET /authors ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AuthorListQuery {
    pub source: Option<String>,
}

pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<AuthorListQuery>,
) -> Result<Json<Vec<UserResponse>>, CatalogError> {
    let usecase = ListAuthorsUseCase {
        repo: state.user_repo(),
    };
    let source = query.source.as_deref().and_then(|raw| raw.parse().ok());
    let authors = usecase.execute(source).await?;
    Ok(Json(authors.into_iter().map(UserResponse::from).collect()))
}

// ── GET /authors/{id} ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AuthorEnvelope {
    pub author: UserResponse,
}

pub async fn get_author(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<AuthorEnvelope>, CatalogError> {
    let usecase = GetAuthorUseCase {
        repo: state.user_repo(),
    };
    let author = usecase.execute(id).await?;
    Ok(Json(AuthorEnvelope {
        author: author.into(),
    }))
}

// ── PUT/PATCH /authors/{id} ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AuthorMessageResponse {
    pub message: &'static str,
    pub author: UserResponse,
}

pub async fn update_author(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Result<Json<AuthorMessageResponse>, CatalogError> {
    let usecase = UpdateAuthorUseCase {
        repo: state.user_repo(),
    };
    let author = usecase.execute(&identity, id, body.into()).await?;
    Ok(Json(AuthorMessageResponse {
        message: "Author updated",
        author: author.into(),
    }))
}

// ── DELETE /authors/{id} ─────────────────────────────────────────────────────

pub async fn delete_author(
    identity: Identity,
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteAuthorUseCase {
        users: state.user_repo(),
        movies: state.movie_repo(),
    };
    usecase.execute(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
