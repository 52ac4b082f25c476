use chrono::NaiveDate;

use cinema_domain::{Source, UserRole};

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, UserPatch, validate_email, validate_username};
use crate::error::{CatalogError, FieldErrors};
use crate::infra::password::hash_password;

const REQUIRED: &str = "This field is required.";

fn invalid_choice(value: &str) -> String {
    format!("\"{value}\" is not a valid choice.")
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

/// Raw registration payload. Every field is optional here so that missing
/// values come back as field errors rather than a rejected body.
#[derive(Debug, Default)]
pub struct RegisterUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub source: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

pub struct RegisterUserUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> RegisterUserUseCase<U> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, CatalogError> {
        let mut errors = FieldErrors::new();

        let username = match input.username {
            Some(username) => {
                validate_username(&username, &mut errors);
                username
            }
            None => {
                errors.add("username", REQUIRED);
                String::new()
            }
        };

        let email = input.email.unwrap_or_default();
        validate_email(&email, &mut errors);

        let password = input.password.unwrap_or_default();
        if password.is_empty() {
            errors.add("password", REQUIRED);
        }

        let role = match input.role.as_deref() {
            None => {
                errors.add("role", REQUIRED);
                None
            }
            Some(raw) => match raw.parse::<UserRole>() {
                Ok(role) => Some(role),
                Err(_) => {
                    errors.add("role", invalid_choice(raw));
                    None
                }
            },
        };

        let source = match input.source.as_deref() {
            None => Source::Manual,
            Some(raw) => raw.parse::<Source>().unwrap_or_else(|_| {
                errors.add("source", invalid_choice(raw));
                Source::Manual
            }),
        };

        errors.into_result()?;
        let Some(role) = role else {
            return Err(CatalogError::Validation(FieldErrors::single("role", REQUIRED)));
        };

        let password_hash = hash_password(&password)?;
        self.repo
            .create(&NewUser {
                username,
                email,
                password_hash: Some(password_hash),
                role,
                bio: input.bio,
                avatar: input.avatar,
                source,
                date_of_birth: input.date_of_birth,
            })
            .await
    }
}

// ── Profile updates (shared by authors and spectators) ───────────────────────

/// Partial profile update as received. `role` is deliberately absent.
#[derive(Debug, Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateUserInput {
    /// Validate and turn into a storage patch, hashing a new password if given.
    pub fn into_patch(self) -> Result<UserPatch, CatalogError> {
        let mut errors = FieldErrors::new();
        if let Some(username) = &self.username {
            validate_username(username, &mut errors);
        }
        if let Some(email) = &self.email {
            validate_email(email, &mut errors);
        }
        if let Some(password) = &self.password {
            if password.is_empty() {
                errors.add("password", "This field may not be blank.");
            }
        }
        errors.into_result()?;

        let password_hash = match &self.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        Ok(UserPatch {
            username: self.username,
            email: self.email,
            password_hash,
            bio: self.bio,
            avatar: self.avatar,
            date_of_birth: self.date_of_birth,
        })
    }
}
