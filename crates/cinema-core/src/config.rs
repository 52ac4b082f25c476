//! Environment-variable configuration helpers.
//!
//! Binaries call [`load_dotenv`] once, then build their config struct from
//! [`required`] and [`optional`].

use std::str::FromStr;

use anyhow::{Context, bail};

/// Load a `.env` file from the working directory if one exists.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Read a required, non-empty variable.
pub fn required(key: &str) -> anyhow::Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => bail!("{key} is set but empty"),
        Err(_) => bail!("{key} is not set"),
    }
}

/// Read and parse an optional variable, falling back to `default` when unset.
///
/// A value that is present but unparseable is an error, not a silent default.
pub fn optional<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value.trim().parse().with_context(|| key.to_owned()),
        Err(_) => Ok(default),
    }
}
