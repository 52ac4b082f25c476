use cinema_auth_types::identity::Identity;
use cinema_domain::{Source, UserRole};

use crate::domain::policy::require_author;
use crate::domain::repository::{MovieRepository, UserRepository};
use crate::domain::types::User;
use crate::error::CatalogError;
use crate::usecase::user::UpdateUserInput;

async fn find_author<U: UserRepository>(users: &U, id: i32) -> Result<User, CatalogError> {
    users
        .find_by_id(id)
        .await?
        .filter(|user| user.role == UserRole::Author)
        .ok_or(CatalogError::AuthorNotFound)
}

// ── ListAuthors ──────────────────────────────────────────────────────────────

pub struct ListAuthorsUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> ListAuthorsUseCase<U> {
    pub async fn execute(&self, source: Option<Source>) -> Result<Vec<User>, CatalogError> {
        self.repo.list(UserRole::Author, source).await
    }
}

// ── GetAuthor ────────────────────────────────────────────────────────────────

pub struct GetAuthorUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> GetAuthorUseCase<U> {
    pub async fn execute(&self, id: i32) -> Result<User, CatalogError> {
        find_author(&self.repo, id).await
    }
}

// ── UpdateAuthor ─────────────────────────────────────────────────────────────

pub struct UpdateAuthorUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> UpdateAuthorUseCase<U> {
    pub async fn execute(
        &self,
        identity: &Identity,
        id: i32,
        input: UpdateUserInput,
    ) -> Result<User, CatalogError> {
        require_author(identity)?;
        find_author(&self.repo, id).await?;
        let patch = input.into_patch()?;
        self.repo.update(id, &patch).await
    }
}

// ── DeleteAuthor ─────────────────────────────────────────────────────────────

pub struct DeleteAuthorUseCase<U: UserRepository, M: MovieRepository> {
    pub users: U,
    pub movies: M,
}

impl<U: UserRepository, M: MovieRepository> DeleteAuthorUseCase<U, M> {
    /// Refuses while the author is linked to any movie; nothing is changed then.
    pub async fn execute(&self, identity: &Identity, id: i32) -> Result<(), CatalogError> {
        require_author(identity)?;
        let author = find_author(&self.users, id).await?;
        if self.movies.count_by_author(author.id).await? > 0 {
            return Err(CatalogError::AuthorHasMovies);
        }
        if !self.users.delete(author.id).await? {
            return Err(CatalogError::AuthorNotFound);
        }
        Ok(())
    }
}
