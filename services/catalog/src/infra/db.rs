use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
    sea_query::{Expr, OnConflict, SimpleExpr},
};

use cinema_catalog_schema::{
    author_ratings, favorites, movie_authors, movies, ratings, revoked_tokens, users,
};
use cinema_core::sea_ext::SearchText;
use cinema_domain::ordering::Sort;
use cinema_domain::{MovieState, Source, UserRole};

use crate::domain::repository::{
    FavoriteRepository, MovieRepository, RatingRepository, RevokedTokenRepository, UserRepository,
};
use crate::domain::types::{
    AuthorRating, Credentials, Favorite, Movie, MovieDraft, MovieFilter, MovieOrder, MoviePatch,
    NewUser, Rating, User, UserPatch,
};
use crate::error::{CatalogError, FieldErrors};

/// Turn a unique-constraint violation into a field error; anything else is
/// internal.
fn unique_or_internal(
    err: DbErr,
    context: &'static str,
    on_conflict: impl FnOnce() -> FieldErrors,
) -> CatalogError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        CatalogError::Validation(on_conflict())
    } else {
        CatalogError::Internal(anyhow::Error::new(err).context(context))
    }
}

fn duplicate_username() -> FieldErrors {
    FieldErrors::single("username", "A user with that username already exists.")
}

fn duplicate_movie() -> FieldErrors {
    FieldErrors::single(
        "non_field_errors",
        "The fields title, status, release_date must make a unique set.",
    )
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        match model {
            Some(model) => Ok(load_users(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, CatalogError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        match model {
            Some(model) => Ok(load_users(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<Credentials>, CatalogError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user credentials")?;
        model
            .map(|model| -> Result<Credentials, CatalogError> {
                Ok(Credentials {
                    user_id: model.id,
                    role: model.role.parse().context("stored user role")?,
                    password_hash: model.password_hash,
                })
            })
            .transpose()
    }

    async fn list(
        &self,
        role: UserRole,
        source: Option<Source>,
    ) -> Result<Vec<User>, CatalogError> {
        let mut query = users::Entity::find().filter(users::Column::Role.eq(role.as_str()));
        if let Some(source) = source {
            query = query.filter(users::Column::Source.eq(source.as_str()));
        }
        let models = query
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        load_users(&self.db, models).await
    }

    async fn create(&self, user: &NewUser) -> Result<User, CatalogError> {
        let model = users::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_owned()),
            bio: Set(user.bio.clone()),
            avatar: Set(user.avatar.clone()),
            source: Set(user.source.as_str().to_owned()),
            date_of_birth: Set(user.date_of_birth),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_or_internal(e, "create user", duplicate_username))?;
        user_from_model(model, vec![])
    }

    async fn update(&self, id: i32, patch: &UserPatch) -> Result<User, CatalogError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        let mut changed = false;
        if let Some(username) = &patch.username {
            am.username = Set(username.clone());
            changed = true;
        }
        if let Some(email) = &patch.email {
            am.email = Set(email.clone());
            changed = true;
        }
        if let Some(hash) = &patch.password_hash {
            am.password_hash = Set(Some(hash.clone()));
            changed = true;
        }
        if let Some(bio) = &patch.bio {
            am.bio = Set(Some(bio.clone()));
            changed = true;
        }
        if let Some(avatar) = &patch.avatar {
            am.avatar = Set(Some(avatar.clone()));
            changed = true;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            am.date_of_birth = Set(Some(date_of_birth));
            changed = true;
        }
        if changed {
            am.update(&self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => CatalogError::UserNotFound,
                e => unique_or_internal(e, "update user", duplicate_username),
            })?;
        }
        self.find_by_id(id).await?.ok_or(CatalogError::UserNotFound)
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

/// Convert user rows, attaching each user's favorite movie ids.
async fn load_users(
    db: &DatabaseConnection,
    models: Vec<users::Model>,
) -> Result<Vec<User>, CatalogError> {
    if models.is_empty() {
        return Ok(vec![]);
    }
    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let rows = favorites::Entity::find()
        .filter(favorites::Column::SpectatorId.is_in(ids))
        .order_by_asc(favorites::Column::Id)
        .all(db)
        .await
        .context("load favorite movie ids")?;
    let mut by_user: HashMap<i32, Vec<i32>> = HashMap::new();
    for row in rows {
        by_user.entry(row.spectator_id).or_default().push(row.movie_id);
    }
    models
        .into_iter()
        .map(|model| {
            let favorite_movies = by_user.remove(&model.id).unwrap_or_default();
            user_from_model(model, favorite_movies)
        })
        .collect()
}

fn user_from_model(model: users::Model, favorite_movies: Vec<i32>) -> Result<User, CatalogError> {
    Ok(User {
        id: model.id,
        username: model.username,
        email: model.email,
        role: model.role.parse().context("stored user role")?,
        bio: model.bio,
        avatar: model.avatar,
        source: model.source.parse().context("stored user source")?,
        date_of_birth: model.date_of_birth,
        favorite_movies,
    })
}

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
}

impl DbMovieRepository {
    async fn load_one(&self, model: movies::Model) -> Result<Movie, CatalogError> {
        load_movies(&self.db, vec![model])
            .await?
            .pop()
            .ok_or(CatalogError::MovieNotFound)
    }
}

impl MovieRepository for DbMovieRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, CatalogError> {
        let model = movies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find movie by id")?;
        match model {
            Some(model) => Ok(Some(self.load_one(model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &MovieFilter) -> Result<Vec<Movie>, CatalogError> {
        let mut query = movies::Entity::find();
        if let Some(source) = filter.source {
            query = query.filter(movies::Column::Source.eq(source.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(movies::Column::Status.eq(status.as_str()));
        }
        if let Some(search) = &filter.search {
            query = query.search_text(&[movies::Column::Title, movies::Column::Overview], search);
        }
        for (field, sort) in &filter.ordering {
            let column = match field {
                MovieOrder::ReleaseDate => movies::Column::ReleaseDate,
                MovieOrder::Title => movies::Column::Title,
            };
            query = match sort {
                Sort::Asc => query.order_by_asc(column),
                Sort::Desc => query.order_by_desc(column),
            };
        }
        let models = query
            .order_by_asc(movies::Column::Id)
            .all(&self.db)
            .await
            .context("list movies")?;
        load_movies(&self.db, models).await
    }

    async fn find_by_content(&self, draft: &MovieDraft) -> Result<Option<Movie>, CatalogError> {
        let model = movies::Entity::find()
            .filter(movies::Column::Title.eq(draft.title.as_str()))
            .filter(movies::Column::Status.eq(draft.status.as_str()))
            .filter(movies::Column::ReleaseDate.eq(draft.release_date))
            .filter(movies::Column::Overview.eq(draft.overview.as_str()))
            .filter(movies::Column::Rating.eq(draft.rating))
            .filter(eq_or_null(movies::Column::Genres, draft.genres.as_deref()))
            .filter(eq_or_null(
                movies::Column::OriginalTitle,
                draft.original_title.as_deref(),
            ))
            .filter(eq_or_null(
                movies::Column::OriginalLanguage,
                draft.original_language.as_deref(),
            ))
            .one(&self.db)
            .await
            .context("find movie by content")?;
        match model {
            Some(model) => Ok(Some(self.load_one(model).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, draft: &MovieDraft) -> Result<Movie, CatalogError> {
        let model = movies::ActiveModel {
            title: Set(draft.title.clone()),
            overview: Set(draft.overview.clone()),
            release_date: Set(draft.release_date),
            rating: Set(draft.rating),
            status: Set(draft.status.as_str().to_owned()),
            source: Set(draft.source.as_str().to_owned()),
            genres: Set(draft.genres.clone()),
            original_title: Set(draft.original_title.clone()),
            original_language: Set(draft.original_language.clone()),
            state: Set(MovieState::Active.as_str().to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_or_internal(e, "create movie", duplicate_movie))?;
        movie_from_model(model, vec![])
    }

    async fn update(&self, id: i32, patch: &MoviePatch) -> Result<Movie, CatalogError> {
        let mut am = movies::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        let mut changed = false;
        if let Some(title) = &patch.title {
            am.title = Set(title.clone());
            changed = true;
        }
        if let Some(overview) = &patch.overview {
            am.overview = Set(overview.clone());
            changed = true;
        }
        if let Some(release_date) = patch.release_date {
            am.release_date = Set(release_date);
            changed = true;
        }
        if let Some(rating) = patch.rating {
            am.rating = Set(rating);
            changed = true;
        }
        if let Some(status) = patch.status {
            am.status = Set(status.as_str().to_owned());
            changed = true;
        }
        if let Some(genres) = &patch.genres {
            am.genres = Set(Some(genres.clone()));
            changed = true;
        }
        if let Some(original_title) = &patch.original_title {
            am.original_title = Set(Some(original_title.clone()));
            changed = true;
        }
        if let Some(original_language) = &patch.original_language {
            am.original_language = Set(Some(original_language.clone()));
            changed = true;
        }
        if changed {
            am.update(&self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => CatalogError::MovieNotFound,
                e => unique_or_internal(e, "update movie", duplicate_movie),
            })?;
        }
        self.find_by_id(id).await?.ok_or(CatalogError::MovieNotFound)
    }

    async fn set_state(&self, id: i32, state: MovieState) -> Result<Movie, CatalogError> {
        let result = movies::Entity::update_many()
            .col_expr(movies::Column::State, Expr::value(state.as_str()))
            .filter(movies::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("set movie state")?;
        if result.rows_affected == 0 {
            return Err(CatalogError::MovieNotFound);
        }
        self.find_by_id(id).await?.ok_or(CatalogError::MovieNotFound)
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let result = movies::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete movie")?;
        Ok(result.rows_affected > 0)
    }

    async fn add_author(&self, movie_id: i32, author_id: i32) -> Result<(), CatalogError> {
        movie_authors::Entity::insert(movie_authors::ActiveModel {
            movie_id: Set(movie_id),
            author_id: Set(author_id),
        })
        .on_conflict(
            OnConflict::columns([movie_authors::Column::MovieId, movie_authors::Column::AuthorId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("link movie author")?;
        Ok(())
    }

    async fn count_by_author(&self, author_id: i32) -> Result<u64, CatalogError> {
        let count = movie_authors::Entity::find()
            .filter(movie_authors::Column::AuthorId.eq(author_id))
            .count(&self.db)
            .await
            .context("count movies by author")?;
        Ok(count)
    }

    async fn delete_by_source(&self, source: Source) -> Result<u64, CatalogError> {
        let result = movies::Entity::delete_many()
            .filter(movies::Column::Source.eq(source.as_str()))
            .exec(&self.db)
            .await
            .context("delete movies by source")?;
        Ok(result.rows_affected)
    }
}

fn eq_or_null(column: impl ColumnTrait, value: Option<&str>) -> SimpleExpr {
    match value {
        Some(value) => column.eq(value),
        None => column.is_null(),
    }
}

/// Convert movie rows, attaching their authors. Order of `models` is kept.
async fn load_movies(
    db: &DatabaseConnection,
    models: Vec<movies::Model>,
) -> Result<Vec<Movie>, CatalogError> {
    if models.is_empty() {
        return Ok(vec![]);
    }
    let movie_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let links = movie_authors::Entity::find()
        .filter(movie_authors::Column::MovieId.is_in(movie_ids))
        .order_by_asc(movie_authors::Column::AuthorId)
        .all(db)
        .await
        .context("load movie author links")?;

    let mut author_ids: Vec<i32> = links.iter().map(|l| l.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();
    let author_models = if author_ids.is_empty() {
        vec![]
    } else {
        users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids))
            .all(db)
            .await
            .context("load movie authors")?
    };
    let authors: HashMap<i32, User> = load_users(db, author_models)
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    let mut by_movie: HashMap<i32, Vec<User>> = HashMap::new();
    for link in links {
        if let Some(author) = authors.get(&link.author_id) {
            by_movie
                .entry(link.movie_id)
                .or_default()
                .push(author.clone());
        }
    }
    models
        .into_iter()
        .map(|model| {
            let movie_authors = by_movie.remove(&model.id).unwrap_or_default();
            movie_from_model(model, movie_authors)
        })
        .collect()
}

fn movie_from_model(model: movies::Model, authors: Vec<User>) -> Result<Movie, CatalogError> {
    Ok(Movie {
        id: model.id,
        title: model.title,
        overview: model.overview,
        release_date: model.release_date,
        rating: model.rating,
        status: model.status.parse().context("stored movie status")?,
        source: model.source.parse().context("stored movie source")?,
        genres: model.genres,
        original_title: model.original_title,
        original_language: model.original_language,
        state: model.state.parse().context("stored movie state")?,
        authors,
    })
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn add_movie_rating(
        &self,
        spectator_id: i32,
        movie_id: i32,
        rating: i32,
    ) -> Result<Rating, CatalogError> {
        let model = ratings::ActiveModel {
            spectator_id: Set(spectator_id),
            movie_id: Set(movie_id),
            rating: Set(rating),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert movie rating")?;
        Ok(Rating {
            id: model.id,
            spectator_id: model.spectator_id,
            movie_id: model.movie_id,
            rating: model.rating,
        })
    }

    async fn upsert_author_rating(
        &self,
        spectator_id: i32,
        author_id: i32,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<(AuthorRating, bool), CatalogError> {
        let inserted = author_ratings::Entity::insert(author_ratings::ActiveModel {
            spectator_id: Set(spectator_id),
            author_id: Set(author_id),
            rating: Set(rating),
            comment: Set(comment.map(str::to_owned)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                author_ratings::Column::SpectatorId,
                author_ratings::Column::AuthorId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert author rating")?;
        let created = inserted > 0;

        if !created {
            // An omitted comment keeps the one already stored.
            let mut update = author_ratings::Entity::update_many()
                .col_expr(author_ratings::Column::Rating, Expr::value(rating));
            if let Some(comment) = comment {
                update = update.col_expr(author_ratings::Column::Comment, Expr::value(comment));
            }
            update
                .filter(author_ratings::Column::SpectatorId.eq(spectator_id))
                .filter(author_ratings::Column::AuthorId.eq(author_id))
                .exec(&self.db)
                .await
                .context("update author rating")?;
        }

        let model = author_ratings::Entity::find()
            .filter(author_ratings::Column::SpectatorId.eq(spectator_id))
            .filter(author_ratings::Column::AuthorId.eq(author_id))
            .one(&self.db)
            .await
            .context("load author rating")?
            .context("author rating missing after upsert")?;
        Ok((
            AuthorRating {
                id: model.id,
                spectator_id: model.spectator_id,
                author_id: model.author_id,
                rating: model.rating,
                comment: model.comment,
            },
            created,
        ))
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn add(&self, spectator_id: i32, movie_id: i32) -> Result<bool, CatalogError> {
        let inserted = favorites::Entity::insert(favorites::ActiveModel {
            spectator_id: Set(spectator_id),
            movie_id: Set(movie_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([favorites::Column::SpectatorId, favorites::Column::MovieId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert favorite")?;
        Ok(inserted > 0)
    }

    async fn remove(&self, spectator_id: i32, movie_id: i32) -> Result<bool, CatalogError> {
        let result = favorites::Entity::delete_many()
            .filter(favorites::Column::SpectatorId.eq(spectator_id))
            .filter(favorites::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }

    async fn list(&self, spectator_id: i32) -> Result<Vec<Favorite>, CatalogError> {
        let rows = favorites::Entity::find()
            .filter(favorites::Column::SpectatorId.eq(spectator_id))
            .order_by_asc(favorites::Column::Id)
            .all(&self.db)
            .await
            .context("list favorites")?;
        if rows.is_empty() {
            return Ok(vec![]);
        }
        let movie_models = movies::Entity::find()
            .filter(movies::Column::Id.is_in(rows.iter().map(|r| r.movie_id).collect::<Vec<_>>()))
            .all(&self.db)
            .await
            .context("load favorite movies")?;
        let mut movies: HashMap<i32, Movie> = load_movies(&self.db, movie_models)
            .await?
            .into_iter()
            .map(|movie| (movie.id, movie))
            .collect();
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                movies.remove(&row.movie_id).map(|movie| Favorite {
                    id: row.id,
                    spectator_id: row.spectator_id,
                    movie,
                })
            })
            .collect())
    }
}

// ── Revoked token repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRevokedTokenRepository {
    pub db: DatabaseConnection,
}

impl RevokedTokenRepository for DbRevokedTokenRepository {
    async fn is_revoked(&self, jti: &str) -> Result<bool, CatalogError> {
        let found = revoked_tokens::Entity::find_by_id(jti.to_owned())
            .one(&self.db)
            .await
            .context("find revoked token")?;
        Ok(found.is_some())
    }

    async fn revoke(
        &self,
        jti: &str,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, CatalogError> {
        let inserted = revoked_tokens::Entity::insert(revoked_tokens::ActiveModel {
            jti: Set(jti.to_owned()),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            revoked_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(revoked_tokens::Column::Jti)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("revoke refresh token")?;
        Ok(inserted > 0)
    }
}
