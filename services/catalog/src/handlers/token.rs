use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use cinema_auth_types::identity::Identity;

use crate::error::CatalogError;
use crate::handlers::JsonBody;
use crate::state::AppState;
use crate::usecase::token::{LogoutUseCase, ObtainTokenUseCase, RefreshTokenUseCase};

// ── POST /token ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ObtainTokenRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

pub async fn obtain_token(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ObtainTokenRequest>,
) -> Result<Json<TokenPairResponse>, CatalogError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(CatalogError::InvalidCredentials);
    };
    let usecase = ObtainTokenUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
        access_token_ttl: state.access_token_ttl,
        refresh_token_ttl: state.refresh_token_ttl,
    };
    let pair = usecase.execute(&username, &password).await?;
    Ok(Json(TokenPairResponse {
        access: pair.access,
        refresh: pair.refresh,
    }))
}

// ── POST /token/refresh ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RefreshRequest {
    pub refresh: Option<String>,
}

#[derive(Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RefreshRequest>,
) -> Result<Json<AccessTokenResponse>, CatalogError> {
    let refresh = body.refresh.ok_or(CatalogError::InvalidToken)?;
    let usecase = RefreshTokenUseCase {
        users: state.user_repo(),
        revoked: state.revoked_token_repo(),
        jwt_secret: state.jwt_secret.clone(),
        access_token_ttl: state.access_token_ttl,
    };
    let access = usecase.execute(&refresh).await?;
    Ok(Json(AccessTokenResponse { access }))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(
    identity: Identity,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RefreshRequest>,
) -> Result<StatusCode, CatalogError> {
    let usecase = LogoutUseCase {
        revoked: state.revoked_token_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    usecase.execute(&identity, body.refresh.as_deref()).await?;
    Ok(StatusCode::RESET_CONTENT)
}
