//! Domain types shared across the cinema crates.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod movie;
pub mod ordering;
pub mod user;

pub use movie::{MovieState, MovieStatus};
pub use user::{Source, UserRole};

/// Returned when a stored or submitted wire value names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
