//! Planet catalog service.

use holocron_common::{AppError, AppResult};
use holocron_db::{entities::planet, repositories::PlanetRepository};

/// Read-only planet catalog.
#[derive(Clone)]
pub struct PlanetService {
    planet_repo: PlanetRepository,
}

impl PlanetService {
    /// Create a new planet service.
    #[must_use]
    pub const fn new(planet_repo: PlanetRepository) -> Self {
        Self { planet_repo }
    }

    /// List every planet.
    pub async fn list(&self) -> AppResult<Vec<planet::Model>> {
        self.planet_repo.find_all().await
    }

    /// Get a planet by ID.
    pub async fn get(&self, id: i32) -> AppResult<planet::Model> {
        self.planet_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))
    }
}
