use cinema_domain::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::CatalogError;
use crate::usecase::user::UpdateUserInput;

async fn find_spectator<U: UserRepository>(users: &U, id: i32) -> Result<User, CatalogError> {
    users
        .find_by_id(id)
        .await?
        .filter(|user| user.role == UserRole::Spectator)
        .ok_or(CatalogError::SpectatorNotFound)
}

// ── ListSpectators ───────────────────────────────────────────────────────────

pub struct ListSpectatorsUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> ListSpectatorsUseCase<U> {
    pub async fn execute(&self) -> Result<Vec<User>, CatalogError> {
        self.repo.list(UserRole::Spectator, None).await
    }
}

// ── GetSpectator ─────────────────────────────────────────────────────────────

pub struct GetSpectatorUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> GetSpectatorUseCase<U> {
    pub async fn execute(&self, id: i32) -> Result<User, CatalogError> {
        find_spectator(&self.repo, id).await
    }
}

// ── UpdateSpectator ──────────────────────────────────────────────────────────

/// Any authenticated caller may update any spectator; authentication is
/// enforced by the handler's extractor.
pub struct UpdateSpectatorUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> UpdateSpectatorUseCase<U> {
    pub async fn execute(&self, id: i32, input: UpdateUserInput) -> Result<User, CatalogError> {
        find_spectator(&self.repo, id).await?;
        let patch = input.into_patch()?;
        self.repo.update(id, &patch).await
    }
}

// ── DeleteSpectator ──────────────────────────────────────────────────────────

pub struct DeleteSpectatorUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> DeleteSpectatorUseCase<U> {
    /// Unconditional; ratings and favorites go with the user.
    pub async fn execute(&self, id: i32) -> Result<(), CatalogError> {
        let spectator = find_spectator(&self.repo, id).await?;
        if !self.repo.delete(spectator.id).await? {
            return Err(CatalogError::SpectatorNotFound);
        }
        Ok(())
    }
}
