use sea_orm::entity::prelude::*;

/// Catalog movie. `(title, status, release_date)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub overview: String,
    pub release_date: chrono::NaiveDate,
    pub rating: i32,
    /// `"released"`, `"post_production"` or `"planned"`.
    pub status: String,
    pub source: String,
    /// Comma-joined genre names.
    pub genres: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    /// `"active"` or `"archived"`.
    pub state: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_authors::Entity")]
    MovieAuthors,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
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

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_authors::Relation::Author.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_authors::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
