//! Mock auth helpers for integration tests.
//!
//! Signs real access tokens with a test secret so requests pass through the
//! `Identity` extractor unchanged.

use std::time::{SystemTime, UNIX_EPOCH};

use http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use jsonwebtoken::{EncodingKey, Header, encode};

use cinema_auth_types::token::{JwtClaims, TokenType};
use cinema_domain::UserRole;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: i32,
    pub role: UserRole,
}

impl MockAuth {
    pub fn new(user_id: i32, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn author(user_id: i32) -> Self {
        Self::new(user_id, UserRole::Author)
    }

    pub fn spectator(user_id: i32) -> Self {
        Self::new(user_id, UserRole::Spectator)
    }

    /// Sign an access token valid for ten minutes.
    pub fn access_token(&self, secret: &str) -> String {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 600;
        let claims = JwtClaims {
            sub: self.user_id.to_string(),
            role: self.role,
            token_type: TokenType::Access,
            jti: format!("mock-{}", self.user_id),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    /// `Authorization: Bearer <token>` header pair.
    pub fn header(&self, secret: &str) -> (HeaderName, HeaderValue) {
        let value = format!("Bearer {}", self.access_token(secret));
        (AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
    }
}
