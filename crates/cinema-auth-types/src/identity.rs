//! Bearer-token identity extractor.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::StatusCode;
use http::request::Parts;

use cinema_domain::UserRole;

use crate::token::validate_access_token;

/// Application state that can hand out the HMAC secret used to verify tokens.
pub trait TokenSecret {
    fn token_secret(&self) -> &str;
}

/// Authenticated caller, resolved from an `Authorization: Bearer <access>` header.
///
/// Returns 401 when the header is absent or the token does not validate.
/// Role enforcement (403) is done after extraction by the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub role: UserRole,
}

impl Identity {
    pub fn is_author(&self) -> bool {
        self.role.is_author()
    }
}

/// Why a request could not be authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityRejection {
    #[error("Authentication credentials were not provided.")]
    MissingCredentials,
    #[error("Given token not valid for any token type")]
    InvalidToken,
}

impl IdentityRejection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "NOT_AUTHENTICATED",
            Self::InvalidToken => "TOKEN_NOT_VALID",
        }
    }
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": self.kind(),
            "detail": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: TokenSecret + Send + Sync,
{
    type Rejection = IdentityRejection;

    // Resolve synchronously and hand back a 'static future; `async fn` here would
    // capture the borrowed parts and state.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = match parts.headers.typed_get::<Authorization<Bearer>>() {
            None => Err(IdentityRejection::MissingCredentials),
            Some(Authorization(bearer)) => {
                validate_access_token(bearer.token(), state.token_secret())
                    .map(|info| Self {
                        user_id: info.user_id,
                        role: info.role,
                    })
                    .map_err(|e| {
                        tracing::debug!(error = %e, "rejected bearer token");
                        IdentityRejection::InvalidToken
                    })
            }
        };

        async move { result }
    }
}
