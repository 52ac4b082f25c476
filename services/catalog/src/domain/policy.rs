//! Role checks applied after authentication.
//!
//! Movie and author mutation only needs the `author` role; it does not check
//! that the caller is one of the movie's authors. Spectator-scoped writes load
//! the acting user so that a stale token for a deleted or re-roled account
//! cannot write on someone's behalf.

use cinema_auth_types::identity::Identity;
use cinema_domain::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::CatalogError;

/// `IsAuthor`: the caller holds the author role.
pub fn is_author(identity: &Identity) -> bool {
    identity.role == UserRole::Author
}

pub fn require_author(identity: &Identity) -> Result<(), CatalogError> {
    if is_author(identity) {
        Ok(())
    } else {
        Err(CatalogError::Forbidden)
    }
}

/// Load the caller and check that they are a spectator.
///
/// An unknown user is 401, any other role is 403.
pub async fn acting_spectator<U: UserRepository>(
    users: &U,
    identity: &Identity,
) -> Result<User, CatalogError> {
    let user = users
        .find_by_id(identity.user_id)
        .await?
        .ok_or(CatalogError::Unauthorized)?;
    if user.role != UserRole::Spectator {
        return Err(CatalogError::Forbidden);
    }
    Ok(user)
}
