//! Active-flag operations beyond the `Repository` contract

use super::core::GenericRepository;
use crate::errors::StoreError;
use crate::traits::{Entity, SoftDeletable};
use crate::EntityId;
use sqlx::Row;

impl<T: Entity> GenericRepository<T> {
    /// Load by id ignoring the active flag, set the flag and stage the update.
    /// Returns whether the entity was found.
    pub async fn set_active(&self, id: EntityId, active: bool) -> Result<bool, StoreError> {
        let Some(mut entity) = sqlx::query_as::<_, T>(T::get_by_id_sql())
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "set_active", e))?
        else {
            return Ok(false);
        };

        entity.set_active(active);
        self.stage_update(&entity).await?;
        Ok(true)
    }

    /// Re-activate a soft-deleted entity
    pub async fn restore(&self, id: EntityId) -> Result<bool, StoreError> {
        self.set_active(id, true).await
    }

    pub async fn count(&self, include_inactive: bool) -> Result<i64, StoreError> {
        let sql = if include_inactive {
            T::count_all_sql()
        } else {
            T::count_active_sql()
        };

        let row = sqlx::query(sql)
            .fetch_one(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "count", e))?;

        row.try_get::<i64, _>("total")
            .map_err(|e| StoreError::database_operation(T::table_name(), "count", e))
    }
}
