//! Favourites endpoints.

use axum::{
    Router,
    extract::State,
    routing::{delete, get, post},
};
use holocron_common::AppResult;
use holocron_db::entities::{FavouriteTarget, favourite};
use serde::{Deserialize, Serialize};

use crate::{
    extractors::{ApiJson, ApiPath},
    middleware::AppState,
    response::ApiResponse,
};

/// Favourite view.
#[derive(Debug, Serialize)]
pub struct FavouriteView {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl From<favourite::Model> for FavouriteView {
    fn from(favourite: favourite::Model) -> Self {
        Self {
            id: favourite.id,
            user_id: favourite.user_id,
            planet_id: favourite.planet_id,
            character_id: favourite.character_id,
        }
    }
}

/// Add favourite request.
#[derive(Debug, Deserialize)]
pub struct AddFavouriteRequest {
    pub user_id: Option<i32>,
}

async fn list_for_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> AppResult<ApiResponse<Vec<FavouriteView>>> {
    let favourites = state.favourite_service.list_for_user(user_id).await?;
    Ok(ApiResponse::result(
        "Your favorites",
        favourites.into_iter().map(Into::into).collect(),
    ))
}

async fn add_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
    ApiJson(req): ApiJson<AddFavouriteRequest>,
) -> AppResult<ApiResponse<FavouriteView>> {
    let favourite = state
        .favourite_service
        .add(req.user_id, FavouriteTarget::Planet(planet_id))
        .await?;
    Ok(ApiResponse::message_with("se agregó el planeta a favorito", favourite.into()).created())
}

async fn add_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
    ApiJson(req): ApiJson<AddFavouriteRequest>,
) -> AppResult<ApiResponse<FavouriteView>> {
    let favourite = state
        .favourite_service
        .add(req.user_id, FavouriteTarget::Character(character_id))
        .await?;
    Ok(ApiResponse::message_with("Personaje añadido a favoritos", favourite.into()).created())
}

async fn remove(
    State(state): State<AppState>,
    ApiPath(favourite_id): ApiPath<i32>,
) -> AppResult<ApiResponse<()>> {
    state.favourite_service.delete(favourite_id).await?;
    Ok(ApiResponse::message("Favorito eliminado correctamente"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/{id}/favourites", get(list_for_user))
        .route("/favorites/planet/{id}", post(add_planet))
        .route("/favorites/character/{id}", post(add_character))
        .route("/favorites/{favourite_id}", delete(remove))
}
