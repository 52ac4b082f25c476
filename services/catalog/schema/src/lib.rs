//! sea-orm entities for the catalog database.

pub mod author_ratings;
pub mod favorites;
pub mod movie_authors;
pub mod movies;
pub mod ratings;
pub mod revoked_tokens;
pub mod users;
