use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;

use cinema_auth_types::identity::Identity;

use crate::error::CatalogError;
use crate::handlers::user::UpdateUserRequest;
use crate::handlers::{JsonBody, JsonPath, UserResponse};
use crate::state::AppState;
use crate::usecase::spectator::{
    DeleteSpectatorUseCase, GetSpectatorUseCase, ListSpectatorsUseCase, UpdateSpectatorUseCase,
};

pub async fn list_spectators(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, CatalogError> {
    let usecase = ListSpectatorsUseCase {
        repo: state.user_repo(),
    };
    let spectators = usecase.execute().await?;
    Ok(Json(spectators.into_iter().map(UserResponse::from).collect()))
}

#[derive(Serialize)]
pub struct SpectatorEnvelope {
    pub spectator: UserResponse,
}

pub async fn get_spectator(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<SpectatorEnvelope>, CatalogError> {
    let usecase = GetSpectatorUseCase {
        repo: state.user_repo(),
    };
    let spectator = usecase.execute(id).await?;
    Ok(Json(SpectatorEnvelope {
        spectator: spectator.into(),
    }))
}

#[derive(Serialize)]
pub struct SpectatorMessageResponse {
    pub message: &'static str,
    pub spectator: UserResponse,
}

/// Any authenticated caller; the extractor alone enforces that.
pub async fn update_spectator(
    _identity: Identity,
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Result<Json<SpectatorMessageResponse>, CatalogError> {
    let usecase = UpdateSpectatorUseCase {
        repo: state.user_repo(),
    };
    let spectator = usecase.execute(id, body.into()).await?;
    Ok(Json(SpectatorMessageResponse {
        message: "Spectator updated",
        spectator: spectator.into(),
    }))
}

pub async fn delete_spectator(
    _identity: Identity,
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteSpectatorUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
