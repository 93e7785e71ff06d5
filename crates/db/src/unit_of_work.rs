//! Transactional boundary for mutating operations.
//!
//! Every write is staged inside a [`UnitOfWork`] and committed only if it
//! succeeded. Any failure rolls the transaction back before the error is
//! returned, leaving the store as if the request never happened.

use holocron_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};

/// A stage-then-commit-or-rollback wrapper around a database transaction.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Begin a new unit of work on `db`.
    pub async fn begin(db: &DatabaseConnection) -> AppResult<Self> {
        let txn = db.begin().await.map_err(map_db_error)?;
        Ok(Self { txn })
    }

    /// Connection to stage changes on.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commit if `result` is `Ok`, otherwise roll back and return the mapped error.
    pub async fn finish<T>(self, result: Result<T, DbErr>) -> AppResult<T> {
        match result {
            Ok(value) => {
                self.txn.commit().await.map_err(map_db_error)?;
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rolling back unit of work");
                if let Err(rollback_err) = self.txn.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(map_db_error(err))
            }
        }
    }
}

/// Map a storage error onto the application taxonomy.
///
/// Unique-constraint violations become [`AppError::Conflict`]; everything else
/// is a [`AppError::Database`] failure.
#[must_use]
pub fn map_db_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::Conflict(detail),
        _ => AppError::Database(err.to_string()),
    }
}
