use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use cinema_auth_types::token::validate_access_token;
use cinema_catalog::domain::repository::UserRepository;
use cinema_catalog::error::CatalogError;
use cinema_catalog::usecase::token::{ObtainTokenUseCase, TokenPair};
use cinema_domain::{Source, UserRole};
use cinema_testing::auth::MockAuth;

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, TestApp, new_user};

async fn register_and_login(app: &TestApp, username: &str) -> (i32, Value) {
    let (status, body) = app
        .send(
            Method::POST,
            "/users/register",
            None,
            Some(json!({ "username": username, "password": "pw-123456", "role": "spectator" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["user"]["id"].as_i64().unwrap() as i32;

    let (status, tokens) = app
        .send(
            Method::POST,
            "/token",
            None,
            Some(json!({ "username": username, "password": "pw-123456" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    (user_id, tokens)
}

#[tokio::test]
async fn should_issue_a_usable_token_pair() {
    let app = TestApp::new().await;
    let (user_id, tokens) = register_and_login(&app, "ann").await;

    let access = tokens["access"].as_str().unwrap();
    let info = validate_access_token(access, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user_id);
    assert_eq!(info.role, UserRole::Spectator);

    // The refresh half is not accepted as a bearer token.
    let refresh = tokens["refresh"].as_str().unwrap();
    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/favorites/my-favorites")
        .header("authorization", format!("Bearer {refresh}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "TOKEN_NOT_VALID");
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let app = TestApp::new().await;
    register_and_login(&app, "ann").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/token",
            None,
            Some(json!({ "username": "ann", "password": "nope" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["detail"],
        "No active account found with the given credentials"
    );
}

#[tokio::test]
async fn imported_authors_cannot_log_in() {
    let app = TestApp::new().await;
    app.users()
        .create(&new_user("david_fincher", UserRole::Author, Source::Tmdb))
        .await
        .unwrap();

    let (status, _) = app
        .send(
            Method::POST,
            "/token",
            None,
            Some(json!({ "username": "david_fincher", "password": "" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_then_logout_blacklists_the_refresh_token() {
    let app = TestApp::new().await;
    let (user_id, tokens) = register_and_login(&app, "ann").await;
    let refresh = tokens["refresh"].clone();
    let auth = MockAuth::spectator(user_id);

    let (status, body) = app
        .send(
            Method::POST,
            "/token/refresh",
            None,
            Some(json!({ "refresh": refresh })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(validate_access_token(body["access"].as_str().unwrap(), TEST_JWT_SECRET).is_ok());

    let (status, body) = app
        .send(
            Method::POST,
            "/logout",
            Some(&auth),
            Some(json!({ "refresh": refresh })),
        )
        .await;
    assert_eq!(status, StatusCode::RESET_CONTENT);
    assert!(body.is_null());

    let (status, body) = app
        .send(
            Method::POST,
            "/logout",
            Some(&auth),
            Some(json!({ "refresh": refresh })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid token or already blacklisted.");

    let (status, _) = app
        .send(
            Method::POST,
            "/token/refresh",
            None,
            Some(json!({ "refresh": refresh })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_requires_a_refresh_token() {
    let app = TestApp::new().await;
    let auth = MockAuth::spectator(1);

    let (status, body) = app
        .send(Method::POST, "/logout", Some(&auth), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Refresh token is required.");

    let (status, _) = app
        .send(
            Method::POST,
            "/logout",
            Some(&auth),
            Some(json!({ "refresh": "garbage" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(Method::POST, "/logout", None, Some(json!({ "refresh": "x" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn cannot_log_out_someone_elses_token() {
    let app = TestApp::new().await;
    let (_, tokens) = register_and_login(&app, "ann").await;

    let (status, _) = app
        .send(
            Method::POST,
            "/logout",
            Some(&MockAuth::spectator(4242)),
            Some(json!({ "refresh": tokens["refresh"] })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── ObtainTokenUseCase with a mock store ─────────────────────────────────────

#[tokio::test]
async fn obtain_token_rejects_unknown_user() {
    let usecase = ObtainTokenUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        access_token_ttl: 60,
        refresh_token_ttl: 120,
    };

    let result: Result<TokenPair, CatalogError> = usecase.execute("ghost", "pw").await;

    assert!(
        matches!(result, Err(CatalogError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}
