//! API endpoints.

mod characters;
mod favourites;
mod planets;
mod users;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(characters::router())
        .merge(planets::router())
        .merge(favourites::router())
}
