//! Favourite service.

use holocron_common::{AppError, AppResult};
use holocron_db::{
    entities::{FavouriteTarget, favourite},
    repositories::{CharacterRepository, FavouriteRepository, PlanetRepository, UserRepository},
};
use tracing::info;

const FAVOURITE_NOT_FOUND: &str = "Favorito no encontrado";

/// Favourite service for managing a user's planets and characters.
#[derive(Clone)]
pub struct FavouriteService {
    favourite_repo: FavouriteRepository,
    user_repo: UserRepository,
    planet_repo: PlanetRepository,
    character_repo: CharacterRepository,
}

impl FavouriteService {
    /// Create a new favourite service.
    #[must_use]
    pub const fn new(
        favourite_repo: FavouriteRepository,
        user_repo: UserRepository,
        planet_repo: PlanetRepository,
        character_repo: CharacterRepository,
    ) -> Self {
        Self {
            favourite_repo,
            user_repo,
            planet_repo,
            character_repo,
        }
    }

    /// All favourites of an existing user.
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<favourite::Model>> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("Not found".to_string()));
        }
        self.favourite_repo.find_by_user_id(user_id).await
    }

    /// Mark `target` as a favourite of `user_id`.
    ///
    /// Checks run in a fixed order: user id present, user exists, target
    /// exists, not already a favourite.
    pub async fn add(
        &self,
        user_id: Option<i32>,
        target: FavouriteTarget,
    ) -> AppResult<favourite::Model> {
        let user_id = match user_id {
            Some(id) if id != 0 => id,
            _ => return Err(AppError::BadRequest("User ID is required".to_string())),
        };

        self.ensure_user(user_id).await?;
        self.ensure_target(target).await?;

        if self
            .favourite_repo
            .find_by_user_and_target(user_id, target)
            .await?
            .is_some()
        {
            return Err(duplicate(target));
        }

        let created = self
            .favourite_repo
            .create(user_id, target)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => duplicate(target),
                other => other,
            })?;

        info!(
            favourite_id = created.id,
            user_id,
            kind = target.kind(),
            target_id = target.id(),
            "Added favourite"
        );
        Ok(created)
    }

    /// Delete a favourite by its own ID.
    pub async fn delete(&self, favourite_id: i32) -> AppResult<()> {
        if self.favourite_repo.find_by_id(favourite_id).await?.is_none() {
            return Err(AppError::NotFound(FAVOURITE_NOT_FOUND.to_string()));
        }

        // A concurrent delete may have won between the lookup and here.
        if self.favourite_repo.delete(favourite_id).await? == 0 {
            return Err(AppError::NotFound(FAVOURITE_NOT_FOUND.to_string()));
        }

        info!(favourite_id, "Deleted favourite");
        Ok(())
    }

    async fn ensure_user(&self, user_id: i32) -> AppResult<()> {
        match self.user_repo.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("User not found".to_string())),
        }
    }

    async fn ensure_target(&self, target: FavouriteTarget) -> AppResult<()> {
        let (exists, message) = match target {
            FavouriteTarget::Planet(id) => (
                self.planet_repo.find_by_id(id).await?.is_some(),
                "Planet not found",
            ),
            FavouriteTarget::Character(id) => (
                self.character_repo.find_by_id(id).await?.is_some(),
                "Character not found",
            ),
        };

        if exists {
            Ok(())
        } else {
            Err(AppError::NotFound(message.to_string()))
        }
    }
}

fn duplicate(target: FavouriteTarget) -> AppError {
    let message = match target {
        FavouriteTarget::Planet(_) => "Planet ya es un favorito",
        FavouriteTarget::Character(_) => "El personaje ya existe en favoritos",
    };
    AppError::BadRequest(message.to_string())
}
