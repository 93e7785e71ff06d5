//! Create favourite table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favourite::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favourite::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favourite::UserId).integer().not_null())
                    .col(ColumnDef::new(Favourite::PlanetId).integer())
                    .col(ColumnDef::new(Favourite::CharacterId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_user")
                            .from(Favourite::Table, Favourite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_planet")
                            .from(Favourite::Table, Favourite::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_character")
                            .from(Favourite::Table, Favourite::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, planet_id) - one favourite per user per planet.
        // NULL planet_id rows (character favourites) never collide.
        manager
            .create_index(
                Index::create()
                    .name("idx_favourite_user_planet")
                    .table(Favourite::Table)
                    .col(Favourite::UserId)
                    .col(Favourite::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, character_id)
        manager
            .create_index(
                Index::create()
                    .name("idx_favourite_user_character")
                    .table(Favourite::Table)
                    .col(Favourite::UserId)
                    .col(Favourite::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favourite::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Favourite {
    Table,
    Id,
    UserId,
    PlanetId,
    CharacterId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}

#[derive(Iden)]
enum Planet {
    Table,
    Id,
}

#[derive(Iden)]
enum Character {
    Table,
    Id,
}
