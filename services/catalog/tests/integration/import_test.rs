use axum::http::StatusCode;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::json;

use cinema_catalog::domain::repository::{MovieRepository, RatingRepository, UserRepository};
use cinema_catalog::domain::types::MovieFilter;
use cinema_catalog::error::{ImportError, TmdbError};
use cinema_catalog::infra::db::{DbMovieRepository, DbRatingRepository, DbUserRepository};
use cinema_catalog::infra::tmdb::TmdbClient;
use cinema_catalog::usecase::import::{ImportSummary, ImportTmdbUseCase, fallback_birthday};
use cinema_catalog_schema::ratings;
use cinema_domain::{MovieStatus, Source, UserRole};
use cinema_testing::tmdb::{FakeTmdb, FakeTmdbBuilder};

use crate::helpers::{date, draft, new_user, test_db};

fn importer(
    fake: &FakeTmdb,
    db: &DatabaseConnection,
) -> ImportTmdbUseCase<TmdbClient, DbUserRepository, DbMovieRepository> {
    ImportTmdbUseCase {
        source: TmdbClient::new(
            reqwest::Client::new(),
            "test-token".to_owned(),
            fake.base_url().to_owned(),
        ),
        users: DbUserRepository { db: db.clone() },
        movies: DbMovieRepository { db: db.clone() },
    }
}

/// Fight Club (director with a birthday), Pulp Fiction (director without one)
/// and Forrest Gump (no director credited).
fn popular_page() -> FakeTmdbBuilder {
    FakeTmdb::builder()
        .route(
            "/movie/popular",
            json!({ "page": 1, "results": [{ "id": 550 }, { "id": 680 }, { "id": 13 }] }),
        )
        .route(
            "/movie/550",
            json!({
                "title": "Fight Club",
                "release_date": "1999-10-15",
                "overview": "An insomniac office worker.",
                "vote_average": 8.4,
                "status": "Released",
                "genres": [{ "id": 18, "name": "Drama" }, { "id": 53, "name": "Thriller" }],
                "original_title": "Fight Club",
                "original_language": "en"
            }),
        )
        .route(
            "/movie/550/credits",
            json!({ "crew": [
                { "id": 1, "name": "Art Linson", "job": "Producer" },
                { "id": 7467, "name": "David Fincher", "job": "Director" }
            ] }),
        )
        .route("/person/7467", json!({ "birthday": "1962-08-28" }))
        .route(
            "/movie/680",
            json!({
                "title": "Pulp Fiction",
                "release_date": "1994-09-10",
                "overview": "A burger-loving hit man.",
                "vote_average": 8.5,
                "status": "Post Production",
                "genres": [],
                "original_language": "en"
            }),
        )
        .route(
            "/movie/680/credits",
            json!({ "crew": [{ "id": 138, "name": "Quentin Tarantino", "job": "Director" }] }),
        )
        .route("/person/138", json!({ "birthday": null }))
        .route(
            "/movie/13",
            json!({
                "title": "Forrest Gump",
                "release_date": "1994-06-23",
                "overview": "A man with a low IQ.",
                "vote_average": 8.5,
                "status": "Released",
                "genres": [{ "id": 18, "name": "Drama" }]
            }),
        )
        .route("/movie/13/credits", json!({ "crew": [] }))
}

#[tokio::test]
async fn should_import_movies_and_directors() {
    let db = test_db().await;
    let fake = popular_page().start().await;

    let summary = importer(&fake, &db).execute(1).await.unwrap();

    assert_eq!(
        summary,
        ImportSummary {
            tmdb_movies_removed: 0,
            movies_seen: 3,
            authors_created: 2,
            movies_created: 2,
            skipped_without_director: 1,
        }
    );

    let users = DbUserRepository { db: db.clone() };
    let fincher = users.find_by_username("david_fincher").await.unwrap().unwrap();
    assert_eq!(fincher.role, UserRole::Author);
    assert_eq!(fincher.source, Source::Tmdb);
    assert_eq!(fincher.email, "david_fincher@tmdb.local");
    assert_eq!(fincher.date_of_birth, Some(date(1962, 8, 28)));
    let tarantino = users
        .find_by_username("quentin_tarantino")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tarantino.date_of_birth, Some(fallback_birthday()));

    let movies = DbMovieRepository { db: db.clone() }
        .list(&MovieFilter {
            source: Some(Source::Tmdb),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(movies.len(), 2);
    let fight_club = movies.iter().find(|m| m.title == "Fight Club").unwrap();
    assert_eq!(fight_club.rating, 8);
    assert_eq!(fight_club.genres.as_deref(), Some("Drama, Thriller"));
    assert_eq!(fight_club.authors[0].username, "david_fincher");
    let pulp = movies.iter().find(|m| m.title == "Pulp Fiction").unwrap();
    assert_eq!(pulp.status, MovieStatus::PostProduction);
    assert_eq!(pulp.genres, None);
    assert_eq!(pulp.original_title.as_deref(), Some("Pulp Fiction"));
    assert!(movies.iter().all(|m| m.title != "Forrest Gump"));

    let requests = fake.requests();
    assert!(
        requests
            .iter()
            .all(|r| r.authorization.as_deref() == Some("Bearer test-token"))
    );
    assert_eq!(fake.hits("/person/7467"), 1);
}

#[tokio::test]
async fn rerun_replaces_tmdb_movies_and_reuses_authors() {
    let db = test_db().await;
    let movies = DbMovieRepository { db: db.clone() };
    let manual = movies
        .create(&draft("Home Movie", MovieStatus::Released, Source::Manual))
        .await
        .unwrap();
    let fake = popular_page().start().await;

    importer(&fake, &db).execute(1).await.unwrap();
    let second = importer(&fake, &db).execute(1).await.unwrap();

    assert_eq!(second.tmdb_movies_removed, 2);
    assert_eq!(second.authors_created, 0);
    assert_eq!(second.movies_created, 2);

    let users = DbUserRepository { db: db.clone() };
    let authors = users.list(UserRole::Author, Some(Source::Tmdb)).await.unwrap();
    assert_eq!(authors.len(), 2);
    assert!(movies.find_by_id(manual.id).await.unwrap().is_some());
    let all = movies.list(&MovieFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn rerun_drops_ratings_of_replaced_tmdb_movies() {
    let db = test_db().await;
    let fake = popular_page().start().await;
    importer(&fake, &db).execute(1).await.unwrap();

    let movies = DbMovieRepository { db: db.clone() };
    let imported = movies
        .list(&MovieFilter {
            source: Some(Source::Tmdb),
            ..Default::default()
        })
        .await
        .unwrap();
    let spectator = DbUserRepository { db: db.clone() }
        .create(&new_user("ann", UserRole::Spectator, Source::Manual))
        .await
        .unwrap();
    let ratings_repo = DbRatingRepository { db: db.clone() };
    for movie in &imported {
        ratings_repo
            .add_movie_rating(spectator.id, movie.id, 9)
            .await
            .unwrap();
    }

    let second = importer(&fake, &db).execute(1).await.unwrap();

    assert_eq!(second.tmdb_movies_removed, 2);
    assert_eq!(ratings::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn existing_author_birth_date_is_corrected() {
    let db = test_db().await;
    let users = DbUserRepository { db: db.clone() };
    let mut stale = new_user("david_fincher", UserRole::Author, Source::Tmdb);
    stale.date_of_birth = Some(date(2000, 1, 1));
    let existing = users.create(&stale).await.unwrap();
    let fake = popular_page().start().await;

    let summary = importer(&fake, &db).execute(1).await.unwrap();

    assert_eq!(summary.authors_created, 1);
    let fincher = users.find_by_id(existing.id).await.unwrap().unwrap();
    assert_eq!(fincher.date_of_birth, Some(date(1962, 8, 28)));
}

#[tokio::test]
async fn upstream_failure_aborts_and_keeps_earlier_work() {
    let db = test_db().await;
    let fake = popular_page()
        .failing("/movie/680", StatusCode::INTERNAL_SERVER_ERROR)
        .start()
        .await;

    let err = importer(&fake, &db).execute(1).await.unwrap_err();

    assert!(
        matches!(
            err,
            ImportError::Upstream(TmdbError::Status { status: 500, .. })
        ),
        "expected upstream 500, got {err:?}"
    );
    let movies = DbMovieRepository { db: db.clone() }
        .list(&MovieFilter::default())
        .await
        .unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Fight Club"]);
    assert_eq!(fake.hits("/movie/13"), 0);
}

#[tokio::test]
async fn director_name_held_by_spectator_aborts() {
    let db = test_db().await;
    DbUserRepository { db: db.clone() }
        .create(&new_user("david_fincher", UserRole::Spectator, Source::Manual))
        .await
        .unwrap();
    let fake = popular_page().start().await;

    let err = importer(&fake, &db).execute(1).await.unwrap_err();

    assert!(
        matches!(err, ImportError::NotAnAuthor { ref username } if username == "david_fincher"),
        "expected NotAnAuthor, got {err:?}"
    );
}

#[tokio::test]
async fn unusable_release_date_aborts() {
    let db = test_db().await;
    let fake = FakeTmdb::builder()
        .route("/movie/popular", json!({ "results": [{ "id": 1 }] }))
        .route(
            "/movie/1",
            json!({ "title": "Undated", "release_date": "", "overview": "", "vote_average": 5.0 }),
        )
        .start()
        .await;

    let err = importer(&fake, &db).execute(1).await.unwrap_err();

    assert!(matches!(
        err,
        ImportError::InvalidReleaseDate { tmdb_id: 1, .. }
    ));
}
