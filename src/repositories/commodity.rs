use crate::domain::{Commodity, CommodityService, CommodityWithServices};
use crate::repositories::forward_repository;
use store_object::{DbContext, EntityId, GenericRepository, Repository, StoreError};

/// Hotel amenities and their priced services
#[derive(Debug, Clone)]
pub struct CommodityRepository {
    repo: GenericRepository<Commodity>,
}

forward_repository!(CommodityRepository, Commodity);

impl CommodityRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<Commodity> {
        &self.repo
    }

    /// Repository for the services, sharing this repository's unit of work
    pub fn services(&self) -> GenericRepository<CommodityService> {
        self.repo.related::<CommodityService>()
    }

    pub async fn list_by_hotel(&self, hotel_id: EntityId) -> Result<Vec<Commodity>, StoreError> {
        self.repo.find_by_column("hotel_id", hotel_id, false).await
    }

    /// Active services of an amenity
    pub async fn list_services(
        &self,
        commodity_id: EntityId,
    ) -> Result<Vec<CommodityService>, StoreError> {
        self.services()
            .find_by_column("commodity_id", commodity_id, false)
            .await
    }

    /// An active amenity with its active services
    pub async fn get_with_services(
        &self,
        commodity_id: EntityId,
    ) -> Result<Option<CommodityWithServices>, StoreError> {
        let Some(commodity) = self.repo.get_by_id(commodity_id, false).await? else {
            return Ok(None);
        };

        let services = self.list_services(commodity.id).await?;
        Ok(Some(CommodityWithServices { commodity, services }))
    }
}
