//! Planet catalog endpoints.

use axum::{Router, extract::State, routing::get};
use holocron_common::AppResult;
use holocron_db::entities::planet;
use serde::Serialize;

use crate::{extractors::ApiPath, middleware::AppState, response::ApiResponse};

/// Planet view.
#[derive(Debug, Serialize)]
pub struct PlanetView {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
}

impl From<planet::Model> for PlanetView {
    fn from(planet: planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
            diameter: planet.diameter,
        }
    }
}

async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<PlanetView>>> {
    let planets = state.planet_service.list().await?;
    Ok(ApiResponse::results(
        "Hello, this is your GET /planets response ",
        planets.into_iter().map(Into::into).collect(),
    ))
}

async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<ApiResponse<PlanetView>> {
    let planet = state.planet_service.get(id).await?;
    Ok(ApiResponse::result(
        "Hello, this is your GET /planet/id response ",
        planet.into(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list))
        .route("/planet/{id}", get(show))
}
