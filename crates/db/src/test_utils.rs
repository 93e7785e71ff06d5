//! Test utilities for database operations.
//!
//! Provides a migrated in-memory SQLite database and catalog fixtures, so
//! repository and HTTP tests run without an external server.

use std::sync::Arc;

use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DbErr, Set};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::entities::{character, planet};
use crate::migrations::Migrator;

/// URL of a private in-memory SQLite database.
pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// A migrated test database.
pub struct TestDatabase {
    /// Database connection.
    pub conn: Arc<DatabaseConnection>,
}

impl TestDatabase {
    /// Create a fresh in-memory SQLite database with every migration applied.
    ///
    /// The pool is pinned to one connection: each SQLite memory connection
    /// would otherwise see its own empty database.
    pub async fn sqlite() -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(SQLITE_MEMORY_URL);
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;
        Migrator::up(&conn, None).await?;

        info!("Created in-memory test database");

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// Get the database connection.
    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        self.conn.as_ref()
    }

    /// Shared handle for repositories and services.
    #[must_use]
    pub fn shared(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.conn)
    }

    /// Seed a character with the given name.
    pub async fn insert_character(&self, name: &str) -> Result<character::Model, DbErr> {
        character::ActiveModel {
            name: Set(name.to_string()),
            gender: Set(Some("n/a".to_string())),
            birth_year: Set(Some("unknown".to_string())),
            height: Set(Some("96".to_string())),
            hair_color: Set(None),
            eye_color: Set(Some("red".to_string())),
            ..Default::default()
        }
        .insert(self.connection())
        .await
    }

    /// Seed a planet with the given name.
    pub async fn insert_planet(&self, name: &str) -> Result<planet::Model, DbErr> {
        planet::ActiveModel {
            name: Set(name.to_string()),
            climate: Set(Some("temperate".to_string())),
            terrain: Set(Some("grasslands".to_string())),
            population: Set(Some("2000000000".to_string())),
            diameter: Set(Some("12500".to_string())),
            ..Default::default()
        }
        .insert(self.connection())
        .await
    }
}
