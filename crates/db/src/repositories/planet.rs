//! Planet catalog repository.

use std::sync::Arc;

use crate::entities::{Planet, planet};
use holocron_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

/// Read-only access to the planet catalog.
#[derive(Clone)]
pub struct PlanetRepository {
    db: Arc<DatabaseConnection>,
}

impl PlanetRepository {
    /// Create a new planet repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a planet by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<planet::Model>> {
        Planet::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List the whole catalog in id order.
    pub async fn find_all(&self) -> AppResult<Vec<planet::Model>> {
        Planet::find()
            .order_by_asc(planet::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
