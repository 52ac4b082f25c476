//! Shared service plumbing: tracing, env config, middleware, health checks and
//! sea-orm query helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod tracing;
