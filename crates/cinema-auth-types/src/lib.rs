//! Auth types shared across cinema crates.
//!
//! Provides JWT claims and validation plus the bearer-token `Identity` extractor.

pub mod identity;
pub mod token;
