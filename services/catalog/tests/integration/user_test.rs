use axum::http::{Method, StatusCode};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use cinema_catalog::error::CatalogError;
use cinema_catalog::usecase::user::{RegisterUserInput, RegisterUserUseCase};
use cinema_catalog_schema::users;
use cinema_domain::{Source, UserRole};

use crate::helpers::{MockUserRepo, TestApp};

#[tokio::test]
async fn register_stores_a_hash_never_the_password() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/users/register",
            None,
            Some(json!({
                "username": "ann",
                "email": "ann@example.com",
                "password": "s3cret-pass",
                "role": "spectator",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["username"], "ann");
    assert_eq!(body["user"]["source"], "manual");
    assert!(body["user"].get("password").is_none());

    let row = users::Entity::find()
        .filter(users::Column::Username.eq("ann"))
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    let hash = row.password_hash.unwrap();
    assert_ne!(hash, "s3cret-pass");
    assert!(hash.starts_with("$argon2"));
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let app = TestApp::new().await;
    app.seed_user("ann", UserRole::Spectator).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/users/register",
            None,
            Some(json!({ "username": "ann", "password": "pw", "role": "author" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["username"][0],
        "A user with that username already exists."
    );
}

#[tokio::test]
async fn should_report_every_missing_field() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::POST, "/users/register", None, Some(json!({})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["username", "password", "role"] {
        assert_eq!(body["error"][field][0], "This field is required.", "{field}");
    }
}

#[tokio::test]
async fn should_reject_unknown_role() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/users/register",
            None,
            Some(json!({ "username": "ann", "password": "pw", "role": "admin" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["role"][0], "\"admin\" is not a valid choice.");
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let app = TestApp::new().await;
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/users/register")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send_request(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["non_field_errors"].is_array());
}

// ── RegisterUserUseCase with a mock store ────────────────────────────────────

#[tokio::test]
async fn usecase_hashes_before_handing_to_store() {
    let repo = MockUserRepo::empty();
    let hashes = repo.hashes_handle();
    let usecase = RegisterUserUseCase { repo };

    let user = usecase
        .execute(RegisterUserInput {
            username: Some("bob".to_owned()),
            password: Some("hunter2".to_owned()),
            role: Some("author".to_owned()),
            source: Some("tmdb".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Author);
    assert_eq!(user.source, Source::Tmdb);
    let hashes = hashes.lock().unwrap();
    let stored = hashes[0].1.as_deref().unwrap();
    assert_ne!(stored, "hunter2");
}

#[tokio::test]
async fn usecase_rejects_blank_username() {
    let usecase = RegisterUserUseCase {
        repo: MockUserRepo::empty(),
    };

    let err = usecase
        .execute(RegisterUserInput {
            username: Some("  ".to_owned()),
            password: Some("pw".to_owned()),
            role: Some("spectator".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    let CatalogError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(errors.get("username").is_some());
}
