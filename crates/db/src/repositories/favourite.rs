//! Favourite repository.

use std::sync::Arc;

use crate::entities::{Favourite, FavouriteTarget, favourite};
use crate::unit_of_work::UnitOfWork;
use holocron_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Favourite repository for database operations.
#[derive(Clone)]
pub struct FavouriteRepository {
    db: Arc<DatabaseConnection>,
}

impl FavouriteRepository {
    /// Create a new favourite repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a favourite by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<favourite::Model>> {
        Favourite::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All favourites owned by a user, in creation order.
    pub async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<favourite::Model>> {
        Favourite::find()
            .filter(favourite::Column::UserId.eq(user_id))
            .order_by_asc(favourite::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the favourite linking `user_id` to `target`, if any.
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavouriteTarget,
    ) -> AppResult<Option<favourite::Model>> {
        Favourite::find()
            .filter(favourite::Column::UserId.eq(user_id))
            .filter(target.column().eq(target.id()))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a favourite of `user_id` on `target`.
    ///
    /// An existing identical favourite surfaces as [`AppError::Conflict`].
    pub async fn create(
        &self,
        user_id: i32,
        target: FavouriteTarget,
    ) -> AppResult<favourite::Model> {
        let uow = UnitOfWork::begin(self.db.as_ref()).await?;
        let result = target
            .into_active_model(user_id)
            .insert(uow.connection())
            .await;
        uow.finish(result).await
    }

    /// Delete a favourite by ID. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let uow = UnitOfWork::begin(self.db.as_ref()).await?;
        let result = Favourite::delete_by_id(id).exec(uow.connection()).await;
        Ok(uow.finish(result).await?.rows_affected)
    }
}
