use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::handlers::{JsonBody, UserResponse};
use crate::state::AppState;
use crate::usecase::user::{RegisterUserInput, RegisterUserUseCase, UpdateUserInput};

// ── POST /users/register ─────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub source: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), CatalogError> {
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            username: body.username,
            email: body.email,
            password: body.password,
            role: body.role,
            source: body.source,
            bio: body.bio,
            avatar: body.avatar,
            date_of_birth: body.date_of_birth,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully",
            user: user.into(),
        }),
    ))
}

// ── Profile update body (authors and spectators) ─────────────────────────────

/// `role` is not accepted here; unknown keys are ignored.
#[derive(Deserialize, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            username: body.username,
            email: body.email,
            password: body.password,
            bio: body.bio,
            avatar: body.avatar,
            date_of_birth: body.date_of_birth,
        }
    }
}
