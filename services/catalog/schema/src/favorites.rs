use sea_orm::entity::prelude::*;

/// A spectator's bookmarked movie. Unique per (spectator, movie).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spectator_id: i32,
    pub movie_id: i32,
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
        belongs_to = "super::movies::Entity",
        from = "Column::MovieId",
        to = "super::movies::Column::Id",
        on_delete = "Cascade"
    )]
    Movie,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Spectator.def()
    }
}

impl Related<super::movies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
