use crate::domain::RoomType;
use crate::repositories::forward_repository;
use store_object::{DbContext, EntityId, GenericRepository, StoreError};

#[derive(Debug, Clone)]
pub struct RoomTypeRepository {
    repo: GenericRepository<RoomType>,
}

forward_repository!(RoomTypeRepository, RoomType);

impl RoomTypeRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<RoomType> {
        &self.repo
    }

    pub async fn list_by_hotel(&self, hotel_id: EntityId) -> Result<Vec<RoomType>, StoreError> {
        self.repo.find_by_column("hotel_id", hotel_id, false).await
    }
}
