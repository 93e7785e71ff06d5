//! Character catalog service.

use holocron_common::{AppError, AppResult};
use holocron_db::{entities::character, repositories::CharacterRepository};

/// Read-only character catalog.
#[derive(Clone)]
pub struct CharacterService {
    character_repo: CharacterRepository,
}

impl CharacterService {
    /// Create a new character service.
    #[must_use]
    pub const fn new(character_repo: CharacterRepository) -> Self {
        Self { character_repo }
    }

    /// List every character.
    pub async fn list(&self) -> AppResult<Vec<character::Model>> {
        self.character_repo.find_all().await
    }

    /// Get a character by ID.
    pub async fn get(&self, id: i32) -> AppResult<character::Model> {
        self.character_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get() {
        let vader = character::Model {
            id: 4,
            name: "Darth Vader".to_string(),
            gender: Some("male".to_string()),
            birth_year: Some("41.9BBY".to_string()),
            height: Some("202".to_string()),
            hair_color: Some("none".to_string()),
            eye_color: Some("yellow".to_string()),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[vader.clone()]])
            .append_query_results([Vec::<character::Model>::new()])
            .into_connection();
        let service = CharacterService::new(CharacterRepository::new(Arc::new(db)));

        assert_eq!(service.get(4).await.unwrap(), vader);
        assert!(matches!(
            service.get(5).await.unwrap_err(),
            AppError::NotFound(msg) if msg == "Not found"
        ));
    }
}
