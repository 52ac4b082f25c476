use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use cinema_auth_types::identity::Identity;
use cinema_auth_types::token::{JwtClaims, TokenType, validate_token};
use cinema_domain::UserRole;

use crate::domain::repository::{RevokedTokenRepository, UserRepository};
use crate::error::CatalogError;
use crate::infra::password::verify_password;

fn now_secs() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Sign a token of `token_type` for a user, valid for `ttl_secs`.
pub fn issue_token(
    user_id: i32,
    role: UserRole,
    token_type: TokenType,
    ttl_secs: u64,
    secret: &str,
) -> Result<String, CatalogError> {
    let claims = JwtClaims {
        sub: user_id.to_string(),
        role,
        token_type,
        jti: Uuid::new_v4().simple().to_string(),
        exp: now_secs() + ttl_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| CatalogError::Internal(e.into()))
}

// ── ObtainToken (login) ──────────────────────────────────────────────────────

#[derive(Debug)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

pub struct ObtainTokenUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
    pub access_token_ttl: u64,
    pub refresh_token_ttl: u64,
}

impl<U: UserRepository> ObtainTokenUseCase<U> {
    /// Accounts without a password hash (imported authors) cannot log in.
    pub async fn execute(&self, username: &str, password: &str) -> Result<TokenPair, CatalogError> {
        let credentials = self
            .users
            .find_credentials(username)
            .await?
            .ok_or(CatalogError::InvalidCredentials)?;
        let hash = credentials
            .password_hash
            .as_deref()
            .ok_or(CatalogError::InvalidCredentials)?;
        if !verify_password(password, hash) {
            return Err(CatalogError::InvalidCredentials);
        }

        let access = issue_token(
            credentials.user_id,
            credentials.role,
            TokenType::Access,
            self.access_token_ttl,
            &self.jwt_secret,
        )?;
        let refresh = issue_token(
            credentials.user_id,
            credentials.role,
            TokenType::Refresh,
            self.refresh_token_ttl,
            &self.jwt_secret,
        )?;
        Ok(TokenPair { access, refresh })
    }
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

pub struct RefreshTokenUseCase<U: UserRepository, T: RevokedTokenRepository> {
    pub users: U,
    pub revoked: T,
    pub jwt_secret: String,
    pub access_token_ttl: u64,
}

impl<U: UserRepository, T: RevokedTokenRepository> RefreshTokenUseCase<U, T> {
    /// Exchange a live, non-blacklisted refresh token for a new access token.
    pub async fn execute(&self, refresh: &str) -> Result<String, CatalogError> {
        let claims = validate_token(refresh, &self.jwt_secret, TokenType::Refresh)
            .map_err(|_| CatalogError::InvalidToken)?;
        if self.revoked.is_revoked(&claims.jti).await? {
            return Err(CatalogError::InvalidToken);
        }
        let user_id = claims.user_id().map_err(|_| CatalogError::InvalidToken)?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CatalogError::InvalidToken)?;

        issue_token(
            user.id,
            user.role,
            TokenType::Access,
            self.access_token_ttl,
            &self.jwt_secret,
        )
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<T: RevokedTokenRepository> {
    pub revoked: T,
    pub jwt_secret: String,
}

impl<T: RevokedTokenRepository> LogoutUseCase<T> {
    /// Blacklist the caller's refresh token.
    ///
    /// A token that does not validate, belongs to another user, or is already
    /// blacklisted fails with [`CatalogError::LogoutFailed`].
    pub async fn execute(
        &self,
        identity: &Identity,
        refresh: Option<&str>,
    ) -> Result<(), CatalogError> {
        let refresh = refresh
            .filter(|token| !token.is_empty())
            .ok_or(CatalogError::RefreshRequired)?;
        let claims = validate_token(refresh, &self.jwt_secret, TokenType::Refresh)
            .map_err(|_| CatalogError::LogoutFailed)?;
        let user_id = claims.user_id().map_err(|_| CatalogError::LogoutFailed)?;
        if user_id != identity.user_id {
            return Err(CatalogError::LogoutFailed);
        }

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp as i64, 0)
            .ok_or(CatalogError::LogoutFailed)?;
        let revoked = self.revoked.revoke(&claims.jti, user_id, expires_at).await?;
        if !revoked {
            return Err(CatalogError::LogoutFailed);
        }
        Ok(())
    }
}
