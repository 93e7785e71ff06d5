//! Character entity (read-only catalog).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(nullable)]
    pub gender: Option<String>,

    #[sea_orm(nullable)]
    pub birth_year: Option<String>,

    #[sea_orm(nullable)]
    pub height: Option<String>,

    #[sea_orm(nullable)]
    pub hair_color: Option<String>,

    #[sea_orm(nullable)]
    pub eye_color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favourite::Entity")]
    Favourite,
}

impl Related<super::favourite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favourite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
