use sea_orm::entity::prelude::*;

/// Authors and spectators, told apart by `role`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    /// Argon2 PHC string. `None` for accounts that cannot log in (imported authors).
    pub password_hash: Option<String>,
    /// `"author"` or `"spectator"`.
    pub role: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub avatar: Option<String>,
    /// `"manual"` or `"tmdb"`.
    pub source: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_authors::Entity")]
    MovieAuthors,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
    #[sea_orm(has_many = "super::revoked_tokens::Entity")]
    RevokedTokens,
}

impl Related<super::movie_authors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieAuthors.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl Related<super::movies::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_authors::Relation::Movie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_authors::Relation::Author.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
