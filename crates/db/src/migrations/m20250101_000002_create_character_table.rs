//! Create character table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Character::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Character::Name).string_len(250).not_null())
                    .col(ColumnDef::new(Character::Gender).string_len(50))
                    .col(ColumnDef::new(Character::BirthYear).string_len(50))
                    .col(ColumnDef::new(Character::Height).string_len(50))
                    .col(ColumnDef::new(Character::HairColor).string_len(50))
                    .col(ColumnDef::new(Character::EyeColor).string_len(50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Character {
    Table,
    Id,
    Name,
    Gender,
    BirthYear,
    Height,
    HairColor,
    EyeColor,
}
