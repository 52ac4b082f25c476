//! JWT access/refresh token claims and validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use cinema_domain::UserRole;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: i32,
    pub role: UserRole,
    pub exp: u64,
}

/// Errors returned by token validation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("wrong token type")]
    WrongTokenType,
}

/// Which half of the token pair a JWT is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims payload shared by token issuance and validation.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user id as a decimal string |
/// | `role` | custom | `"author"` or `"spectator"` |
/// | `token_type` | custom | `"access"` or `"refresh"` |
/// | `jti` | `jti` | unique token id, the blacklist key |
/// | `exp` | `exp` | expiry, seconds since UNIX epoch |
///
/// [`Serialize`] requires the **`token-issuer`** cargo feature; only the crate
/// that signs tokens enables it.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(any(feature = "token-issuer", test), derive(Serialize))]
pub struct JwtClaims {
    pub sub: String,
    pub role: UserRole,
    pub token_type: TokenType,
    pub jti: String,
    pub exp: u64,
}

impl JwtClaims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub.parse().map_err(|_| AuthError::Malformed)
    }
}

// ── Core decode (private) ────────────────────────────────────────────────

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

// ── Public: all consumers ────────────────────────────────────────────────

/// Validate a bearer access token, returning the parsed identity.
///
/// Refresh tokens are rejected with [`AuthError::WrongTokenType`].
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    if claims.token_type != TokenType::Access {
        return Err(AuthError::WrongTokenType);
    }
    Ok(TokenInfo {
        user_id: claims.user_id()?,
        role: claims.role,
        exp: claims.exp,
    })
}

// ── Feature-gated: token issuer only ─────────────────────────────────────

/// Validate a token of the expected type and return its raw claims.
///
/// Used by the refresh and logout flows, which need `jti` and `exp`.
#[cfg(any(feature = "token-issuer", test))]
pub fn validate_token(
    token: &str,
    secret: &str,
    expected: TokenType,
) -> Result<JwtClaims, AuthError> {
    let claims = decode_jwt(token, secret)?;
    if claims.token_type != expected {
        return Err(AuthError::WrongTokenType);
    }
    Ok(claims)
}
