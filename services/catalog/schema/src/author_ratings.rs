use sea_orm::entity::prelude::*;

/// A spectator's score and comment for an author. Unique per (spectator, author).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "author_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spectator_id: i32,
    pub author_id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SpectatorId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Spectator,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl ActiveModelBehavior for ActiveModel {}
