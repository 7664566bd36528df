use crate::domain::{Hotel, HotelWithRoomTypes, RoomType};
use crate::repositories::forward_repository;
use store_object::{DbContext, EntityId, GenericRepository, Repository, StoreError};

#[derive(Debug, Clone)]
pub struct HotelRepository {
    repo: GenericRepository<Hotel>,
}

forward_repository!(HotelRepository, Hotel);

impl HotelRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<Hotel> {
        &self.repo
    }

    /// Whether any hotel, active or not, is registered under this tax id
    pub async fn exists_by_tax_id(&self, tax_id: &str) -> Result<bool, StoreError> {
        self.repo.exists_by_column("tax_id", tax_id.trim(), true).await
    }

    /// An active hotel with its active room types
    pub async fn get_with_room_types(
        &self,
        hotel_id: EntityId,
    ) -> Result<Option<HotelWithRoomTypes>, StoreError> {
        let Some(hotel) = self.repo.get_by_id(hotel_id, false).await? else {
            return Ok(None);
        };

        let room_types = self
            .repo
            .related::<RoomType>()
            .find_by_column("hotel_id", hotel.id, false)
            .await?;

        Ok(Some(HotelWithRoomTypes { hotel, room_types }))
    }

    pub async fn list_by_city(&self, city: &str) -> Result<Vec<Hotel>, StoreError> {
        self.repo.find_by_column("city", city, false).await
    }
}
