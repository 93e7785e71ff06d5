//! API middleware.

#![allow(missing_docs)]

use std::sync::Arc;

use holocron_core::{CharacterService, FavouriteService, PlanetService, UserService};
use holocron_db::repositories::{
    CharacterRepository, FavouriteRepository, PlanetRepository, UserRepository,
};
use sea_orm::DatabaseConnection;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub character_service: CharacterService,
    pub planet_service: PlanetService,
    pub favourite_service: FavouriteService,
}

impl AppState {
    /// Wire every repository and service onto one connection pool.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let user_repo = UserRepository::new(Arc::clone(&db));
        let character_repo = CharacterRepository::new(Arc::clone(&db));
        let planet_repo = PlanetRepository::new(Arc::clone(&db));
        let favourite_repo = FavouriteRepository::new(db);

        Self {
            user_service: UserService::new(user_repo.clone()),
            character_service: CharacterService::new(character_repo.clone()),
            planet_service: PlanetService::new(planet_repo.clone()),
            favourite_service: FavouriteService::new(
                favourite_repo,
                user_repo,
                planet_repo,
                character_repo,
            ),
        }
    }
}
