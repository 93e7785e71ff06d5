//! User service.

use holocron_common::{AppError, AppResult, hash_password};
use holocron_db::{entities::user, repositories::UserRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

const MISSING_FIELDS: &str = "Username, Email and Password are Required";
const EMAIL_TAKEN: &str = "Email already registered";

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

/// Input for creating a new user.
///
/// Every field is optional at the type level so a missing one is reported
/// with the registration message instead of a generic body error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(length(max = 120))]
    pub email: Option<String>,

    #[validate(length(max = 256))]
    pub password: Option<String>,

    #[validate(length(max = 80))]
    pub username: Option<String>,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// List every user.
    pub async fn list(&self) -> AppResult<Vec<user::Model>> {
        self.user_repo.find_all().await
    }

    /// Get a user by ID.
    pub async fn get(&self, id: i32) -> AppResult<user::Model> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Register a new, active user.
    pub async fn create(&self, input: CreateUserInput) -> AppResult<user::Model> {
        let (Some(email), Some(password), Some(username)) =
            (&input.email, &input.password, &input.username)
        else {
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        };

        input.validate()?;

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let model = user::ActiveModel {
            email: Set(email.clone()),
            password: Set(hash_password(password)?),
            username: Set(username.clone()),
            is_active: Set(true),
            ..Default::default()
        };

        let created = self.user_repo.create(model).await.map_err(|e| match e {
            AppError::Conflict(_) => AppError::BadRequest(EMAIL_TAKEN.to_string()),
            other => other,
        })?;

        info!(user_id = created.id, "Created user");
        Ok(created)
    }
}
