use axum::http::{Method, StatusCode};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use cinema_catalog_schema::{author_ratings, ratings};
use cinema_domain::{MovieStatus, UserRole};
use cinema_testing::auth::MockAuth;

use crate::helpers::TestApp;

// ── Movie ratings ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_add_movie_rating() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/ratings/{}/add-to-movie", movie.id),
            Some(&MockAuth::spectator(ann.id)),
            Some(json!({ "rating": 9 })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Rating added");
    assert_eq!(body["rating"]["spectator"], ann.id);
    assert_eq!(body["rating"]["movie"], movie.id);
    assert_eq!(body["rating"]["rating"], 9);
}

// Movie ratings carry no uniqueness constraint; repeat ratings are kept as
// separate rows.
#[tokio::test]
async fn repeat_movie_ratings_are_allowed() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    let auth = MockAuth::spectator(ann.id);
    let uri = format!("/ratings/{}/add-to-movie", movie.id);

    let (first, a) = app
        .send(Method::POST, &uri, Some(&auth), Some(json!({ "rating": 5 })))
        .await;
    let (second, b) = app
        .send(Method::POST, &uri, Some(&auth), Some(json!({ "rating": 7 })))
        .await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);
    assert_ne!(a["rating"]["id"], b["rating"]["id"]);
    let stored = ratings::Entity::find()
        .filter(ratings::Column::SpectatorId.eq(ann.id))
        .filter(ratings::Column::MovieId.eq(movie.id))
        .count(&app.db)
        .await
        .unwrap();
    assert_eq!(stored, 2);
}

#[tokio::test]
async fn should_require_rating_value() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    let uri = format!("/ratings/{}/add-to-movie", movie.id);
    let auth = MockAuth::spectator(ann.id);

    let (status, body) = app.send(Method::POST, &uri, Some(&auth), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rating value is required");

    let (status, body) = app
        .send(Method::POST, &uri, Some(&auth), Some(json!({ "rating": 0 })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "RATING_REQUIRED");

    let (status, body) = app
        .send(Method::POST, &uri, Some(&auth), Some(json!({ "rating": 11 })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION");
    assert!(body["error"]["rating"].is_array());
}

#[tokio::test]
async fn numeric_string_ratings_are_accepted() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    let uri = format!("/ratings/{}/add-to-movie", movie.id);
    let auth = MockAuth::spectator(ann.id);

    let (status, body) = app
        .send(Method::POST, &uri, Some(&auth), Some(json!({ "rating": "7" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rating"]["rating"], 7);

    let (status, body) = app
        .send(Method::POST, &uri, Some(&auth), Some(json!({ "rating": "seven" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["rating"][0], "A valid integer is required.");
}

#[tokio::test]
async fn deleting_movie_cascades_its_ratings() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;
    let heat = app.seed_movie("Heat", MovieStatus::Released).await;
    let alien = app.seed_movie("Alien", MovieStatus::Released).await;
    let auth = MockAuth::spectator(ann.id);
    for movie_id in [heat.id, alien.id] {
        let (status, _) = app
            .send(
                Method::POST,
                &format!("/ratings/{movie_id}/add-to-movie"),
                Some(&auth),
                Some(json!({ "rating": 8 })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/movies/{}", heat.id),
            Some(&MockAuth::author(author.id)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let for_heat = ratings::Entity::find()
        .filter(ratings::Column::MovieId.eq(heat.id))
        .count(&app.db)
        .await
        .unwrap();
    assert_eq!(for_heat, 0);
    let for_alien = ratings::Entity::find()
        .filter(ratings::Column::MovieId.eq(alien.id))
        .count(&app.db)
        .await
        .unwrap();
    assert_eq!(for_alien, 1);
}

#[tokio::test]
async fn authors_cannot_rate_movies() {
    let app = TestApp::new().await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;

    let (status, _) = app
        .send(
            Method::POST,
            &format!("/ratings/{}/add-to-movie", movie.id),
            Some(&MockAuth::author(author.id)),
            Some(json!({ "rating": 9 })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ── Author ratings ───────────────────────────────────────────────────────────

#[tokio::test]
async fn rerating_an_author_updates_the_single_row() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let author = app.seed_user("michael_mann", UserRole::Author).await;
    let auth = MockAuth::spectator(ann.id);
    let uri = format!("/ratings/{}/add-to-author", author.id);

    let (status, first) = app
        .send(
            Method::POST,
            &uri,
            Some(&auth),
            Some(json!({ "rating": 6, "comment": "Solid" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["message"], "Rating added");
    assert_eq!(first["rating"]["comment"], "Solid");

    // No comment: the stored one stays.
    let (status, second) = app
        .send(Method::POST, &uri, Some(&auth), Some(json!({ "rating": 9 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["message"], "Rating updated");
    assert_eq!(second["rating"]["id"], first["rating"]["id"]);
    assert_eq!(second["rating"]["rating"], 9);
    assert_eq!(second["rating"]["comment"], "Solid");

    let stored = author_ratings::Entity::find()
        .filter(author_ratings::Column::SpectatorId.eq(ann.id))
        .filter(author_ratings::Column::AuthorId.eq(author.id))
        .count(&app.db)
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn should_not_rate_a_spectator_as_author() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let bob = app.seed_user("bob", UserRole::Spectator).await;

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/ratings/{}/add-to-author", bob.id),
            Some(&MockAuth::spectator(ann.id)),
            Some(json!({ "rating": 3 })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "AUTHOR_NOT_FOUND");
}

#[tokio::test]
async fn deleting_spectator_cascades_ratings() {
    let app = TestApp::new().await;
    let ann = app.seed_user("ann", UserRole::Spectator).await;
    let movie = app.seed_movie("Heat", MovieStatus::Released).await;
    let auth = MockAuth::spectator(ann.id);
    app.send(
        Method::POST,
        &format!("/ratings/{}/add-to-movie", movie.id),
        Some(&auth),
        Some(json!({ "rating": 8 })),
    )
    .await;

    let (status, _) = app
        .send(Method::DELETE, &format!("/spectators/{}", ann.id), Some(&auth), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let remaining = ratings::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(remaining, 0);
}
