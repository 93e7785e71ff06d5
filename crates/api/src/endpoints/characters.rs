//! Character catalog endpoints.

use axum::{Router, extract::State, routing::get};
use holocron_common::AppResult;
use holocron_db::entities::character;
use serde::Serialize;

use crate::{extractors::ApiPath, middleware::AppState, response::ApiResponse};

/// Character view.
#[derive(Debug, Serialize)]
pub struct CharacterView {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

impl From<character::Model> for CharacterView {
    fn from(character: character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
            birth_year: character.birth_year,
            height: character.height,
            hair_color: character.hair_color,
            eye_color: character.eye_color,
        }
    }
}

async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<CharacterView>>> {
    let characters = state.character_service.list().await?;
    Ok(ApiResponse::results(
        "Hello, this is your GET /characters response ",
        characters.into_iter().map(Into::into).collect(),
    ))
}

async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<ApiResponse<CharacterView>> {
    let character = state.character_service.get(id).await?;
    Ok(ApiResponse::result(
        "Hello, this is your GET /character/id response ",
        character.into(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/character", get(list))
        .route("/character/{id}", get(show))
}
