//! Specialized repositories
//!
//! Each wraps a `GenericRepository` on the request's `DbContext` and adds the
//! queries that cannot be expressed generically. All of them implement
//! `Repository` by forwarding to the wrapped generic repository.

pub mod commodity;
pub mod hotel;
pub mod package;
pub mod payment;
pub mod reservation;
pub mod review;
pub mod room_type;
pub mod user;

pub use commodity::CommodityRepository;
pub use hotel::HotelRepository;
pub use package::PackageRepository;
pub use payment::PaymentRepository;
pub use reservation::ReservationRepository;
pub use review::ReviewRepository;
pub use room_type::RoomTypeRepository;
pub use user::UserRepository;

use std::collections::HashMap;
use store_object::{Entity, EntityId, SqlValue};

/// Implement `Repository` for a specialized repository whose `repo` field is
/// the wrapped `GenericRepository`.
macro_rules! forward_repository {
    ($repository:ty, $entity:ty) => {
        #[async_trait::async_trait]
        impl store_object::Repository for $repository {
            type Entity = $entity;

            async fn get_all(
                &self,
                include_inactive: bool,
            ) -> Result<Vec<$entity>, store_object::StoreError> {
                store_object::Repository::get_all(&self.repo, include_inactive).await
            }

            async fn get_by_id(
                &self,
                id: store_object::EntityId,
                include_inactive: bool,
            ) -> Result<Option<$entity>, store_object::StoreError> {
                store_object::Repository::get_by_id(&self.repo, id, include_inactive).await
            }

            async fn add(&self, entity: $entity) -> Result<$entity, store_object::StoreError> {
                store_object::Repository::add(&self.repo, entity).await
            }

            async fn update(&self, entity: $entity) -> Result<$entity, store_object::StoreError> {
                store_object::Repository::update(&self.repo, entity).await
            }

            async fn soft_delete(
                &self,
                id: store_object::EntityId,
            ) -> Result<bool, store_object::StoreError> {
                store_object::Repository::soft_delete(&self.repo, id).await
            }

            async fn save_changes(&self) -> Result<bool, store_object::StoreError> {
                store_object::Repository::save_changes(&self.repo).await
            }
        }
    };
}

pub(crate) use forward_repository;

/// Distinct identifiers as bind values, in first-seen order
pub(crate) fn id_values(ids: impl IntoIterator<Item = EntityId>) -> Vec<SqlValue> {
    let mut seen = Vec::new();
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen.into_iter().map(SqlValue::Integer).collect()
}

/// Index entities by identifier
pub(crate) fn by_id<T: Entity>(entities: Vec<T>) -> HashMap<EntityId, T> {
    entities
        .into_iter()
        .map(|entity| (entity.extract_id(), entity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_values_are_distinct() {
        assert_eq!(
            id_values([3, 1, 3, 2, 1]),
            vec![SqlValue::Integer(3), SqlValue::Integer(1), SqlValue::Integer(2)]
        );
        assert!(id_values(Vec::new()).is_empty());
    }
}
