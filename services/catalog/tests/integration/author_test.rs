use axum::http::{Method, StatusCode};
use serde_json::json;

use cinema_catalog::domain::repository::{MovieRepository, UserRepository};
use cinema_domain::{MovieStatus, Source, UserRole};
use cinema_testing::auth::MockAuth;

use crate::helpers::{TestApp, new_user};

#[tokio::test]
async fn should_list_only_authors_filtered_by_source() {
    let app = TestApp::new().await;
    app.seed_user("michael_mann", UserRole::Author).await;
    app.seed_user("ann", UserRole::Spectator).await;
    app.users()
        .create(&new_user("david_fincher", UserRole::Author, Source::Tmdb))
        .await
        .unwrap();

    let (status, body) = app.get("/authors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = app.get("/authors?source=tmdb").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["david_fincher"]);
}

#[tokio::test]
async fn should_not_serve_spectator_as_author() {
    let app = TestApp::new().await;
    let spectator = app.seed_user("ann", UserRole::Spectator).await;

    let (status, body) = app.get(&format!("/authors/{}", spectator.id)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "AUTHOR_NOT_FOUND");
}

#[tokio::test]
async fn should_render_author_without_password() {
    let app = TestApp::new().await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;

    let (status, body) = app.get(&format!("/authors/{}", author.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["username"], "michael_mann");
    assert_eq!(body["author"]["role"], "author");
    assert_eq!(body["author"]["source"], "manual");
    assert!(body["author"].get("password").is_none());
    assert!(body["author"].get("password_hash").is_none());
}

#[tokio::test]
async fn should_update_author_but_never_role() {
    let app = TestApp::new().await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/authors/{}", author.id),
            Some(&MockAuth::author(author.id)),
            Some(json!({ "bio": "Director of Heat", "role": "spectator" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Author updated");
    assert_eq!(body["author"]["bio"], "Director of Heat");
    assert_eq!(body["author"]["role"], "author");
}

#[tokio::test]
async fn should_delete_author_without_movies() {
    let app = TestApp::new().await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/authors/{}", author.id),
            Some(&MockAuth::author(author.id)),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(app.users().find_by_id(author.id).await.unwrap().is_none());
}

#[tokio::test]
async fn should_refuse_to_delete_author_with_movies() {
    let app = TestApp::new().await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    app.movies().add_author(movie.id, author.id).await.unwrap();

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/authors/{}", author.id),
            Some(&MockAuth::author(author.id)),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "AUTHOR_HAS_MOVIES");
    assert!(app.users().find_by_id(author.id).await.unwrap().is_some());
    let movie = app.movies().find_by_id(movie.id).await.unwrap().unwrap();
    assert_eq!(movie.authors.len(), 1);
}

#[tokio::test]
async fn spectator_cannot_delete_author() {
    let app = TestApp::new().await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/authors/{}", author.id),
            Some(&MockAuth::spectator(99)),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ── Spectators ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_update_and_delete_spectators() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    app.seed_user("michael_mann", UserRole::Author).await;

    let (_, body) = app.get("/spectators").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = app.get(&format!("/spectators/{}", ann.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spectator"]["username"], "ann");

    // Any authenticated caller may edit a spectator.
    let other = MockAuth::author(500);
    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/spectators/{}", ann.id),
            Some(&other),
            Some(json!({ "email": "ann@cinema.test" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Spectator updated");
    assert_eq!(body["spectator"]["email"], "ann@cinema.test");

    let (status, _) = app
        .send(Method::DELETE, &format!("/spectators/{}", ann.id), Some(&other), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.get(&format!("/spectators/{}", ann.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn spectator_mutation_requires_authentication() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;

    let (status, _) = app
        .send(Method::DELETE, &format!("/spectators/{}", ann.id), None, None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
