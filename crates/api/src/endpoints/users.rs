//! Users endpoints.

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use holocron_common::AppResult;
use holocron_core::CreateUserInput;
use holocron_db::entities::user;
use serde::Serialize;

use crate::{
    extractors::{ApiJson, ApiPath},
    middleware::AppState,
    response::ApiResponse,
};

/// User view. The password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_active: bool,
}

impl From<user::Model> for UserView {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

/// List all users.
async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<UserView>>> {
    let users = state.user_service.list().await?;
    Ok(ApiResponse::result(
        "Users",
        users.into_iter().map(Into::into).collect(),
    ))
}

/// Get a user by id.
async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<ApiResponse<UserView>> {
    let user = state.user_service.get(id).await?;
    Ok(ApiResponse::result(
        "Hello, this is your GET /user/id response ",
        user.into(),
    ))
}

/// Register a user.
async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateUserInput>,
) -> AppResult<ApiResponse<UserView>> {
    let user = state.user_service.create(input).await?;
    Ok(ApiResponse::result("Usuario creado", user.into()).created())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list))
        .route("/user", post(create))
        .route("/user/{id}", get(show))
}
