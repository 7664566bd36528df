//! `Repository` implementation for `GenericRepository`

use super::core::GenericRepository;
use crate::errors::StoreError;
use crate::traits::{Entity, Repository};
use crate::EntityId;
use async_trait::async_trait;

#[async_trait]
impl<T: Entity> Repository for GenericRepository<T> {
    type Entity = T;

    async fn get_all(&self, include_inactive: bool) -> Result<Vec<T>, StoreError> {
        let sql = if include_inactive {
            T::list_all_sql()
        } else {
            T::list_active_sql()
        };

        crate::debug_log!("get_all on {}: {}", T::table_name(), sql);
        sqlx::query_as::<_, T>(sql)
            .fetch_all(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "get_all", e))
    }

    async fn get_by_id(&self, id: EntityId, include_inactive: bool) -> Result<Option<T>, StoreError> {
        let sql = if include_inactive {
            T::get_by_id_sql()
        } else {
            T::get_active_by_id_sql()
        };

        sqlx::query_as::<_, T>(sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "get_by_id", e))
    }

    async fn add(&self, entity: T) -> Result<T, StoreError> {
        self.stage_insert(&entity).await?;
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, StoreError> {
        self.stage_update(&entity).await?;
        Ok(entity)
    }

    async fn soft_delete(&self, id: EntityId) -> Result<bool, StoreError> {
        self.set_active(id, false).await
    }

    async fn save_changes(&self) -> Result<bool, StoreError> {
        self.context.save_changes().await
    }
}
