pub mod author;
pub mod favorite;
pub mod import;
pub mod movie;
pub mod rating;
pub mod spectator;
pub mod token;
pub mod user;
