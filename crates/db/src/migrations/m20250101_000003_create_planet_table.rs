//! Create planet table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planet::Name).string_len(250).not_null())
                    .col(ColumnDef::new(Planet::Climate).string_len(100))
                    .col(ColumnDef::new(Planet::Terrain).string_len(100))
                    .col(ColumnDef::new(Planet::Population).string_len(50))
                    .col(ColumnDef::new(Planet::Diameter).string_len(50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Planet {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
    Population,
    Diameter,
}
