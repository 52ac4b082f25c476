//! Test utilities for cinema crates.
//!
//! Provides `MockAuth` for bearer headers and `FakeTmdb`, an in-process stand-in
//! for the movie-metadata API. Use from tests only, never from production code.

pub mod auth;
pub mod tmdb;
