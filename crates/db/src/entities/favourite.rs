//! Favourite entity: links a user to either a planet or a character.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Favourite entity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favourite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// User who marked the favourite.
    pub user_id: i32,

    /// Set for planet favourites.
    #[sea_orm(nullable)]
    pub planet_id: Option<i32>,

    /// Set for character favourites.
    #[sea_orm(nullable)]
    pub character_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id"
    )]
    Character,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The catalog entry a favourite points at. Exactly one is set per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavouriteTarget {
    /// A planet favourite.
    Planet(i32),
    /// A character favourite.
    Character(i32),
}

impl FavouriteTarget {
    /// Human-readable kind, used in log fields.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Character(_) => "character",
        }
    }

    /// Column holding this target's id.
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Planet(_) => Column::PlanetId,
            Self::Character(_) => Column::CharacterId,
        }
    }

    /// Referenced catalog id.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Planet(id) | Self::Character(id) => id,
        }
    }

    /// Build the row for a new favourite of `user_id` on this target.
    #[must_use]
    pub fn into_active_model(self, user_id: i32) -> ActiveModel {
        let (planet_id, character_id) = match self {
            Self::Planet(id) => (Some(id), None),
            Self::Character(id) => (None, Some(id)),
        };

        ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(planet_id),
            character_id: Set(character_id),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_target_sets_only_planet() {
        let model = FavouriteTarget::Planet(3).into_active_model(7);
        assert_eq!(model.user_id, Set(7));
        assert_eq!(model.planet_id, Set(Some(3)));
        assert_eq!(model.character_id, Set(None));
        assert!(model.id.is_not_set());
    }

    #[test]
    fn test_character_target_sets_only_character() {
        let model = FavouriteTarget::Character(4).into_active_model(7);
        assert_eq!(model.planet_id, Set(None));
        assert_eq!(model.character_id, Set(Some(4)));
    }

    #[test]
    fn test_target_accessors() {
        assert_eq!(FavouriteTarget::Planet(1).kind(), "planet");
        assert_eq!(FavouriteTarget::Character(2).id(), 2);
        assert!(matches!(
            FavouriteTarget::Character(2).column(),
            Column::CharacterId
        ));
    }
}
