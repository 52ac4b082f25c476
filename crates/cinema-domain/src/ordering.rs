//! Sort direction and `ordering` query parsing.

use serde::{Deserialize, Serialize};

/// Generic sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    Desc,
    Asc,
}

/// Parse a comma-separated `ordering` parameter (`title,-release_date`).
///
/// A leading `-` means descending. Fields outside `allowed` are dropped, as are
/// repeats of a field already taken.
pub fn parse_ordering<'a>(raw: &'a str, allowed: &[&str]) -> Vec<(&'a str, Sort)> {
    let mut out: Vec<(&str, Sort)> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (field, sort) = match part.strip_prefix('-') {
            Some(field) => (field, Sort::Desc),
            None => (part, Sort::Asc),
        };
        if !allowed.contains(&field) || out.iter().any(|(f, _)| *f == field) {
            continue;
        }
        out.push((field, sort));
    }
    out
}
