//! Character catalog repository.

use std::sync::Arc;

use crate::entities::{Character, character};
use holocron_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

/// Read-only access to the character catalog.
#[derive(Clone)]
pub struct CharacterRepository {
    db: Arc<DatabaseConnection>,
}

impl CharacterRepository {
    /// Create a new character repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a character by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<character::Model>> {
        Character::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List the whole catalog in id order.
    pub async fn find_all(&self) -> AppResult<Vec<character::Model>> {
        Character::find()
            .order_by_asc(character::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_character(id: i32, name: &str) -> character::Model {
        character::Model {
            id,
            name: name.to_string(),
            gender: Some("male".to_string()),
            birth_year: Some("19BBY".to_string()),
            height: Some("172".to_string()),
            hair_color: Some("blond".to_string()),
            eye_color: Some("blue".to_string()),
        }
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let luke = create_test_character(1, "Luke Skywalker");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[luke.clone()]])
                .into_connection(),
        );

        let repo = CharacterRepository::new(db);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(luke));
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<character::Model>::new()])
                .into_connection(),
        );

        let repo = CharacterRepository::new(db);
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
