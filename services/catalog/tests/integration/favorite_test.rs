use axum::http::{Method, StatusCode};

use cinema_catalog::domain::repository::UserRepository;
use cinema_domain::{MovieStatus, UserRole};
use cinema_testing::auth::MockAuth;

use crate::helpers::TestApp;

#[tokio::test]
async fn adding_a_favorite_twice_is_idempotent() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    let auth = MockAuth::spectator(ann.id);
    let uri = format!("/favorites/{}/add", movie.id);

    let (status, body) = app.send(Method::POST, &uri, Some(&auth), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Movie added to favorites");

    let (status, body) = app.send(Method::POST, &uri, Some(&auth), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Movie is already in favorites");

    let (status, body) = app
        .send(Method::GET, "/favorites/my-favorites", Some(&auth), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let favorites = body["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["spectator"], ann.id);
    assert_eq!(favorites[0]["movie"]["title"], "Heat");

    let user = app.users().find_by_id(ann.id).await.unwrap().unwrap();
    assert_eq!(user.favorite_movies, vec![movie.id]);
}

#[tokio::test]
async fn should_remove_favorite_then_report_missing() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    let auth = MockAuth::spectator(ann.id);

    app.send(
        Method::POST,
        &format!("/favorites/{}/add", movie.id),
        Some(&auth),
        None,
    )
    .await;
    let uri = format!("/favorites/{}/remove", movie.id);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&auth), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.send(Method::DELETE, &uri, Some(&auth), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "movie is not in favorites");
}

#[tokio::test]
async fn should_404_for_unknown_movie() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/favorites/404/add",
            Some(&MockAuth::spectator(ann.id)),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "MOVIE_NOT_FOUND");
}

#[tokio::test]
async fn favorites_are_spectator_only() {
    let app = TestApp::new().await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;

    let (status, _) = app
        .send(
            Method::POST,
            &format!("/favorites/{}/add", movie.id),
            Some(&MockAuth::author(author.id)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/favorites/my-favorites").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleting_movie_removes_it_from_favorites() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    let auth = MockAuth::spectator(ann.id);
    app.send(
        Method::POST,
        &format!("/favorites/{}/add", movie.id),
        Some(&auth),
        None,
    )
    .await;

    app.send(
        Method::DELETE,
        &format!("/movies/{}", movie.id),
        Some(&MockAuth::author(1)),
        None,
    )
    .await;

    let (_, body) = app
        .send(Method::GET, "/favorites/my-favorites", Some(&auth), None)
        .await;
    assert!(body["favorites"].as_array().unwrap().is_empty());
}
