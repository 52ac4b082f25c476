use chrono::NaiveDate;
use serde::Deserialize;

use cinema_domain::ordering::Sort;
use cinema_domain::{MovieState, MovieStatus, Source, UserRole};

use crate::error::FieldErrors;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

const TITLE_MAX_LEN: usize = 255;
const USERNAME_MAX_LEN: usize = 150;

// ── Users ────────────────────────────────────────────────────────────────────

/// A user as exposed by the catalog. The password hash never leaves the store
/// through this type; see [`Credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub source: Source,
    pub date_of_birth: Option<NaiveDate>,
    /// Ids of movies the user bookmarked. Always empty for authors.
    pub favorite_movies: Vec<i32>,
}

/// What the login flow needs to check a password.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_id: i32,
    pub role: UserRole,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub source: Source,
    pub date_of_birth: Option<NaiveDate>,
}

/// Partial user update. `None` leaves the column untouched. Role is not patchable.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

pub fn validate_username(username: &str, errors: &mut FieldErrors) {
    if username.trim().is_empty() {
        errors.add("username", "This field may not be blank.");
    } else if username.chars().count() > USERNAME_MAX_LEN {
        errors.add(
            "username",
            format!("Ensure this field has no more than {USERNAME_MAX_LEN} characters."),
        );
    }
}

/// Empty email is allowed; anything else needs a local part and a domain.
pub fn validate_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        return;
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    };
    if !valid {
        errors.add("email", "Enter a valid email address.");
    }
}

/// Username the importer derives for a director: lowercased, spaces as `_`.
pub fn director_username(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

// ── Movies ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub overview: String,
    pub release_date: NaiveDate,
    pub rating: i32,
    pub status: MovieStatus,
    pub source: Source,
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub state: MovieState,
    pub authors: Vec<User>,
}

/// Every content column of a movie. The importer's find-or-create key is the
/// whole draft minus `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub overview: String,
    pub release_date: NaiveDate,
    pub rating: i32,
    pub status: MovieStatus,
    pub source: Source,
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
}

impl MovieDraft {
    pub fn validate(&self) -> Result<(), crate::error::CatalogError> {
        let mut errors = FieldErrors::new();
        validate_title(&self.title, &mut errors);
        validate_overview(&self.overview, &mut errors);
        validate_rating("rating", self.rating, &mut errors);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<i32>,
    pub status: Option<MovieStatus>,
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
}

impl MoviePatch {
    pub fn validate(&self) -> Result<(), crate::error::CatalogError> {
        let mut errors = FieldErrors::new();
        if let Some(title) = &self.title {
            validate_title(title, &mut errors);
        }
        if let Some(overview) = &self.overview {
            validate_overview(overview, &mut errors);
        }
        if let Some(rating) = self.rating {
            validate_rating("rating", rating, &mut errors);
        }
        errors.into_result()
    }
}

fn validate_title(title: &str, errors: &mut FieldErrors) {
    if title.trim().is_empty() {
        errors.add("title", "This field may not be blank.");
    } else if title.chars().count() > TITLE_MAX_LEN {
        errors.add(
            "title",
            format!("Ensure this field has no more than {TITLE_MAX_LEN} characters."),
        );
    }
}

fn validate_overview(overview: &str, errors: &mut FieldErrors) {
    if overview.trim().is_empty() {
        errors.add("overview", "This field may not be blank.");
    }
}

pub fn validate_rating(field: &str, rating: i32, errors: &mut FieldErrors) {
    if rating < MIN_RATING {
        errors.add(
            field,
            format!("Ensure this value is greater than or equal to {MIN_RATING}."),
        );
    } else if rating > MAX_RATING {
        errors.add(
            field,
            format!("Ensure this value is less than or equal to {MAX_RATING}."),
        );
    }
}

/// Fields `GET /movies?ordering=` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieOrder {
    ReleaseDate,
    Title,
}

impl MovieOrder {
    pub const FIELDS: &'static [&'static str] = &["release_date", "title"];

    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "release_date" => Some(Self::ReleaseDate),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub source: Option<Source>,
    pub status: Option<MovieStatus>,
    pub search: Option<String>,
    /// Applied in order; ties (and the empty case) fall back to id ascending.
    pub ordering: Vec<(MovieOrder, Sort)>,
}

// ── Ratings and favorites ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id: i32,
    pub spectator_id: i32,
    pub movie_id: i32,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRating {
    pub id: i32,
    pub spectator_id: i32,
    pub author_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub spectator_id: i32,
    pub movie: Movie,
}

// ── External movie metadata (TMDB response shapes) ───────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PopularPage {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub title: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// First crew entry whose job is exactly `Director`.
    pub fn director(&self) -> Option<&CrewMember> {
        self.crew.iter().find(|member| member.job == "Director")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub birthday: Option<String>,
}

/// TMDB `vote_average` (0.0..=10.0) as a catalog rating: truncated, then
/// clamped into the 1..=10 range.
pub fn rating_from_vote_average(vote_average: f64) -> i32 {
    (vote_average.trunc() as i32).clamp(MIN_RATING, MAX_RATING)
}
