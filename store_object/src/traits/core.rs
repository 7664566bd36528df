//! Repository interface
//!
//! The CRUD contract shared by every repository, independent of the entity.

use crate::traits::Entity;
use crate::{EntityId, StoreError};
use async_trait::async_trait;

/// Generic CRUD with soft-delete semantics.
///
/// Reads go straight to the database; writes are staged on the request's
/// `DbContext` and only reach the database on `save_changes`.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Entity;

    /// Every entity, active ones only unless `include_inactive`
    async fn get_all(&self, include_inactive: bool) -> Result<Vec<Self::Entity>, StoreError>;

    /// One entity by id; `None` when missing (or inactive and not requested)
    async fn get_by_id(
        &self,
        id: EntityId,
        include_inactive: bool,
    ) -> Result<Option<Self::Entity>, StoreError>;

    /// Stage an insertion.
    ///
    /// With `id == 0` the database assigns the key during `save_changes`. The
    /// returned entity keeps id 0; read the assigned key from
    /// `DbContext::last_generated_key` after the flush.
    async fn add(&self, entity: Self::Entity) -> Result<Self::Entity, StoreError>;

    /// Stage an update of an existing row; existence is not checked
    async fn update(&self, entity: Self::Entity) -> Result<Self::Entity, StoreError>;

    /// Load by id (inactive rows included), clear the active flag and stage the update.
    /// Returns whether the entity was found.
    async fn soft_delete(&self, id: EntityId) -> Result<bool, StoreError>;

    /// Commit every staged write in one transaction.
    /// Returns whether at least one row was affected.
    async fn save_changes(&self) -> Result<bool, StoreError>;
}
